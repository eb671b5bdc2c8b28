//! Closure-driven namers.
//!
//! For callers that keep a resource's parent and id as separate values rather
//! than one record. The caller supplies getters that produce the variable
//! values for a pattern and setters that rebuild values from scanned tokens;
//! the namer owns pattern selection and rendering.
//!
//! - [`IdNamer`]: root resources, named by an id alone
//! - [`ParentNamer`]: singletons, named by their parent alone
//! - [`ParentIdNamer`]: collection members, named by parent and id
//!
//! Format takes an explicit pattern index; there is no "try all" mode here.

use std::fmt;

use resname_pattern::{CompileError, Pattern, PatternError, PatternSet, Template, Tokens};

use crate::{NamerError, NamerResult, Resource};

/// Produces the variable values of pattern `index` for an id.
pub type IdGetter<I> = Box<dyn Fn(&I, usize) -> NamerResult<Vec<String>> + Send + Sync>;
/// Produces the variable values of pattern `index` for a parent.
pub type ParentGetter<P> = Box<dyn Fn(&P, usize) -> NamerResult<Vec<String>> + Send + Sync>;
/// Produces the variable values of pattern `index` for a parent and id.
pub type ParentIdGetter<P, I> = Box<dyn Fn(&P, &I, usize) -> NamerResult<Vec<String>> + Send + Sync>;
/// Rebuilds a value from the tokens scanned with pattern `index`.
pub type Setter<T> = Box<dyn Fn(&[&str], usize) -> NamerResult<T> + Send + Sync>;

/// Patterns plus the selection logic shared by the explicit namers.
///
/// Parents follow [`Template::derive_singleton_parent`]: a pattern of fewer
/// than three segments is root level and its parent is `""` or the pattern
/// itself.
#[derive(Clone, Debug)]
struct Patterns {
    set: PatternSet,
    parents: Vec<Option<Template>>,
}

impl Patterns {
    fn compile<S: AsRef<str>>(patterns: &[S]) -> NamerResult<Self> {
        let set = PatternSet::from_declared(patterns)?;
        let parents = set
            .iter()
            .map(|pattern| pattern.template().derive_singleton_parent())
            .collect();
        Ok(Self { set, parents })
    }

    fn get(&self, index: usize) -> NamerResult<&Pattern> {
        self.set.get(index).ok_or(NamerError::InvalidPatternIndex {
            index: isize::try_from(index).unwrap_or(isize::MAX),
        })
    }

    /// Render `template` from values produced by a getter.
    fn render(template: &Template, values: &[String]) -> NamerResult<String> {
        let mut values = values.iter();
        template.render_with(|key| match values.next() {
            Some(value) if !value.is_empty() => Ok(value.as_str()),
            Some(_) => Err(NamerError::absent(key, "")),
            None => Err(NamerError::InvalidField {
                key: key.to_owned(),
                type_name: "getter values",
            }),
        })
    }

    fn match_name<'n>(&self, name: &'n str) -> NamerResult<(&Pattern, Tokens<'n>)> {
        self.set.first_match(name).ok_or_else(|| NamerError::InvalidName {
            name: name.to_owned(),
        })
    }

    /// The lowest-index pattern whose parent matches `parent`. Root-level
    /// matches carry no tokens.
    fn match_parent<'n>(&self, parent: &'n str) -> NamerResult<(&Pattern, Option<Tokens<'n>>)> {
        self.set
            .iter()
            .zip(&self.parents)
            .find_map(|(pattern, template)| match template {
                Some(template) => template.scan(parent).map(|tokens| (pattern, Some(tokens))),
                None => (parent.is_empty() || pattern.template().matches(parent))
                    .then_some((pattern, None)),
            })
            .ok_or_else(|| NamerError::InvalidParent {
                parent: parent.to_owned(),
            })
    }

    fn parse_parent<P: Default>(&self, parent: &str, setter: &Setter<P>) -> NamerResult<(P, usize)> {
        let (pattern, tokens) = self.match_parent(parent)?;
        let Some(tokens) = tokens else {
            return Ok((P::default(), pattern.index()));
        };
        let value = setter(tokens.as_slice(), pattern.index())?;
        Ok((value, pattern.index()))
    }
}

// === IdNamer ===

/// Namer for root resources identified by a single id.
///
/// Every pattern has at most one variable.
pub struct IdNamer<I> {
    patterns: Patterns,
    getter: IdGetter<I>,
    setter: Setter<I>,
}

impl<I> IdNamer<I> {
    pub fn new<S, G, T>(patterns: &[S], getter: G, setter: T) -> NamerResult<Self>
    where
        S: AsRef<str>,
        G: Fn(&I, usize) -> NamerResult<Vec<String>> + Send + Sync + 'static,
        T: Fn(&[&str], usize) -> NamerResult<I> + Send + Sync + 'static,
    {
        let patterns = Patterns::compile(patterns)?;
        for pattern in &patterns.set {
            let template = pattern.template();
            let found = template.variable_count();
            if found > 1 {
                return Err(CompileError::InvalidPattern {
                    index: pattern.index(),
                    pattern: template.as_str().to_owned(),
                    source: PatternError::Arity {
                        pattern: template.as_str().to_owned(),
                        expected: 1,
                        found,
                    },
                }
                .into());
            }
        }

        Ok(Self {
            patterns,
            getter: Box::new(getter),
            setter: Box::new(setter),
        })
    }

    /// Build from the patterns declared on `R`.
    pub fn for_resource<R, G, T>(getter: G, setter: T) -> NamerResult<Self>
    where
        R: Resource,
        G: Fn(&I, usize) -> NamerResult<Vec<String>> + Send + Sync + 'static,
        T: Fn(&[&str], usize) -> NamerResult<I> + Send + Sync + 'static,
    {
        Self::new(R::DESCRIPTOR.patterns(), getter, setter)
    }

    pub fn format(&self, id: &I, index: usize) -> NamerResult<String> {
        let pattern = self.patterns.get(index)?;
        let values = (self.getter)(id, index)?;
        Patterns::render(pattern.template(), &values)
    }

    /// Parse `name`, returning the id and the matched pattern index.
    pub fn parse(&self, name: &str) -> NamerResult<(I, usize)> {
        let (pattern, tokens) = self.patterns.match_name(name)?;
        let id = (self.setter)(tokens.as_slice(), pattern.index())?;
        Ok((id, pattern.index()))
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns.set
    }
}

// === ParentNamer ===

/// Namer for singleton resources, identified by their parent alone.
pub struct ParentNamer<P> {
    patterns: Patterns,
    getter: ParentGetter<P>,
    setter: Setter<P>,
    parent_setter: Setter<P>,
}

impl<P> ParentNamer<P> {
    pub fn new<S, G, T, U>(patterns: &[S], getter: G, setter: T, parent_setter: U) -> NamerResult<Self>
    where
        S: AsRef<str>,
        G: Fn(&P, usize) -> NamerResult<Vec<String>> + Send + Sync + 'static,
        T: Fn(&[&str], usize) -> NamerResult<P> + Send + Sync + 'static,
        U: Fn(&[&str], usize) -> NamerResult<P> + Send + Sync + 'static,
    {
        Ok(Self {
            patterns: Patterns::compile(patterns)?,
            getter: Box::new(getter),
            setter: Box::new(setter),
            parent_setter: Box::new(parent_setter),
        })
    }

    /// Build from the patterns declared on `R`.
    pub fn for_resource<R, G, T, U>(getter: G, setter: T, parent_setter: U) -> NamerResult<Self>
    where
        R: Resource,
        G: Fn(&P, usize) -> NamerResult<Vec<String>> + Send + Sync + 'static,
        T: Fn(&[&str], usize) -> NamerResult<P> + Send + Sync + 'static,
        U: Fn(&[&str], usize) -> NamerResult<P> + Send + Sync + 'static,
    {
        Self::new(R::DESCRIPTOR.patterns(), getter, setter, parent_setter)
    }

    pub fn format(&self, parent: &P, index: usize) -> NamerResult<String> {
        let pattern = self.patterns.get(index)?;
        let values = (self.getter)(parent, index)?;
        Patterns::render(pattern.template(), &values)
    }

    pub fn parse(&self, name: &str) -> NamerResult<(P, usize)> {
        let (pattern, tokens) = self.patterns.match_name(name)?;
        let parent = (self.setter)(tokens.as_slice(), pattern.index())?;
        Ok((parent, pattern.index()))
    }

    /// Parse a parent name. A root-level pattern matched by `""` or by its
    /// own name yields `P::default()`.
    pub fn parse_parent(&self, parent: &str) -> NamerResult<(P, usize)>
    where
        P: Default,
    {
        self.patterns.parse_parent(parent, &self.parent_setter)
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns.set
    }
}

// === ParentIdNamer ===

/// Namer for collection members, identified by parent and id.
pub struct ParentIdNamer<P, I> {
    patterns: Patterns,
    getter: ParentIdGetter<P, I>,
    setter: Setter<(P, I)>,
    parent_setter: Setter<P>,
}

impl<P, I> ParentIdNamer<P, I> {
    pub fn new<S, G, T, U>(patterns: &[S], getter: G, setter: T, parent_setter: U) -> NamerResult<Self>
    where
        S: AsRef<str>,
        G: Fn(&P, &I, usize) -> NamerResult<Vec<String>> + Send + Sync + 'static,
        T: Fn(&[&str], usize) -> NamerResult<(P, I)> + Send + Sync + 'static,
        U: Fn(&[&str], usize) -> NamerResult<P> + Send + Sync + 'static,
    {
        Ok(Self {
            patterns: Patterns::compile(patterns)?,
            getter: Box::new(getter),
            setter: Box::new(setter),
            parent_setter: Box::new(parent_setter),
        })
    }

    /// Build from the patterns declared on `R`.
    pub fn for_resource<R, G, T, U>(getter: G, setter: T, parent_setter: U) -> NamerResult<Self>
    where
        R: Resource,
        G: Fn(&P, &I, usize) -> NamerResult<Vec<String>> + Send + Sync + 'static,
        T: Fn(&[&str], usize) -> NamerResult<(P, I)> + Send + Sync + 'static,
        U: Fn(&[&str], usize) -> NamerResult<P> + Send + Sync + 'static,
    {
        Self::new(R::DESCRIPTOR.patterns(), getter, setter, parent_setter)
    }

    pub fn format(&self, parent: &P, id: &I, index: usize) -> NamerResult<String> {
        let pattern = self.patterns.get(index)?;
        let values = (self.getter)(parent, id, index)?;
        Patterns::render(pattern.template(), &values)
    }

    pub fn parse(&self, name: &str) -> NamerResult<(P, I, usize)> {
        let (pattern, tokens) = self.patterns.match_name(name)?;
        let (parent, id) = (self.setter)(tokens.as_slice(), pattern.index())?;
        Ok((parent, id, pattern.index()))
    }

    /// Parse a parent name. A root-level pattern matched by `""` or by its
    /// own name yields `P::default()`.
    pub fn parse_parent(&self, parent: &str) -> NamerResult<(P, usize)>
    where
        P: Default,
    {
        self.patterns.parse_parent(parent, &self.parent_setter)
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns.set
    }
}

macro_rules! debug_patterns {
    ($($ty:ident<$($param:ident),+>),*) => {$(
        impl<$($param),+> fmt::Debug for $ty<$($param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("patterns", &self.patterns.set)
                    .finish_non_exhaustive()
            }
        }
    )*};
}

debug_patterns!(IdNamer<I>, ParentNamer<P>, ParentIdNamer<P, I>);

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
