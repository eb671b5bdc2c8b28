//! Parsed resource-name templates.
//!
//! A template is a `/`-separated list of segments alternating between
//! collection literals and `{variable}` placeholders:
//!
//! ```text
//! parentOnes/{parent_one}/standardNamedResources/{standard_named_resource}
//! ^^^^^^^^^^ ^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^
//!  literal     variable          literal                 variable
//! ```
//!
//! Templates are validated once when parsed and never change afterwards.
//! Matching a concrete name against a template is a single left-to-right pass
//! over the name's segments; no allocation happens unless the template has more
//! than four variables.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use smallvec::SmallVec;

use crate::PatternError;

/// Segment separator in templates and names.
pub const SEPARATOR: char = '/';

/// Name token meaning "unspecified" at a variable position.
pub const WILDCARD: &str = "-";

/// Variable tokens captured by [`Template::scan`], in template order.
pub type Tokens<'n> = SmallVec<[&'n str; 4]>;

/// One segment of a template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Fixed text that a name must repeat verbatim.
    Literal(String),
    /// A placeholder bound to a record field by key.
    Variable(String),
}

impl Segment {
    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable(_))
    }

    /// The variable key, if this is a variable segment.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        match self {
            Segment::Variable(key) => Some(key),
            Segment::Literal(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Variable(key) => write!(f, "{{{key}}}"),
        }
    }
}

/// A validated resource-name template.
///
/// The default value is the empty template, which only ever appears as the
/// derived parent of a root-level pattern and matches only the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse and validate a template string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut segments: Vec<Segment> = Vec::new();
        for (i, raw) in pattern.split(SEPARATOR).enumerate() {
            let position = i + 1;
            let segment = classify(pattern, raw, position)?;

            match segments.last() {
                None if segment.is_variable() => {
                    return Err(PatternError::LeadingVariable {
                        pattern: pattern.to_owned(),
                    });
                }
                Some(prev) if prev.is_variable() == segment.is_variable() => {
                    return Err(PatternError::NotAlternating {
                        pattern: pattern.to_owned(),
                        position,
                    });
                }
                _ => {}
            }

            if let Some(key) = segment.key() {
                if segments.iter().any(|s| s.key() == Some(key)) {
                    return Err(PatternError::DuplicateVariable {
                        pattern: pattern.to_owned(),
                        key: key.to_owned(),
                    });
                }
            }

            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_owned(),
            segments,
        })
    }

    fn from_segments(segments: Vec<Segment>) -> Self {
        let source = segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        Self { source, segments }
    }

    /// The template as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` for the root parent template.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Variable keys, left to right.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(Segment::key)
    }

    pub fn variable_count(&self) -> usize {
        self.keys().count()
    }

    /// Derive the template of the containing resource.
    ///
    /// Templates of three or fewer segments are root level and yield the empty
    /// template. Otherwise the trailing segment is dropped, and if that leaves
    /// an odd count the dropped piece was an id inside a collection pair, so the
    /// collection literal goes too:
    ///
    /// ```text
    /// parentOnes/{a}/resources/{b}         -> parentOnes/{a}
    /// parentOnes/{a}/parentTwos/{b}/config -> parentOnes/{a}/parentTwos/{b}
    /// resources/{b}                        -> (root)
    /// ```
    pub fn derive_parent(&self) -> Template {
        if self.segments.len() <= 3 {
            return Template::default();
        }
        self.strip_trailing_resource()
    }

    /// Derive the parent template, keeping three-segment singletons nested.
    ///
    /// Only templates of fewer than three segments are root level (`None`), so
    /// `projects/{p}/settings` has the parent `projects/{p}`. Longer templates
    /// follow [`derive_parent`](Self::derive_parent).
    pub fn derive_singleton_parent(&self) -> Option<Template> {
        (self.segments.len() >= 3).then(|| self.strip_trailing_resource())
    }

    fn strip_trailing_resource(&self) -> Template {
        let mut keep = self.segments.len().saturating_sub(1);
        if keep % 2 == 1 {
            keep -= 1;
        }
        Template::from_segments(self.segments[..keep].to_vec())
    }

    /// Structurally match `name`, returning its variable tokens in order.
    ///
    /// Literal segments must be equal; variable positions accept any non-empty
    /// token that is not itself a `{placeholder}`, including the wildcard `-`.
    pub fn scan<'n>(&self, name: &'n str) -> Option<Tokens<'n>> {
        if self.segments.is_empty() {
            return name.is_empty().then(Tokens::new);
        }

        let mut tokens = Tokens::new();
        let mut parts = name.split(SEPARATOR);
        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(text) => {
                    if part != text {
                        return None;
                    }
                }
                Segment::Variable(_) => {
                    if part.is_empty() || is_placeholder(part) {
                        return None;
                    }
                    tokens.push(part);
                }
            }
        }

        // Trailing segments mean the name is longer than the template.
        parts.next().is_none().then_some(tokens)
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.scan(name).is_some()
    }

    /// Interpolate `values` into the template's variables, in order.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String, PatternError> {
        let expected = self.variable_count();
        if values.len() != expected {
            return Err(PatternError::Arity {
                pattern: self.source.clone(),
                expected,
                found: values.len(),
            });
        }

        let capacity = self.source.len() + values.iter().map(|v| v.as_ref().len()).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        let mut values = values.iter();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(SEPARATOR);
            }
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(_) => {
                    if let Some(value) = values.next() {
                        out.push_str(value.as_ref());
                    }
                }
            }
        }
        Ok(out)
    }

    /// Interpolate by asking `lookup` for each variable, left to right.
    ///
    /// Stops at the first key `lookup` fails on.
    pub fn render_with<V, E, F>(&self, mut lookup: F) -> Result<String, E>
    where
        V: fmt::Display,
        F: FnMut(&str) -> Result<V, E>,
    {
        let mut out = String::with_capacity(self.source.len());
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(SEPARATOR);
            }
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(key) => {
                    let value = lookup(key)?;
                    // Writing to a String cannot fail.
                    let _ = write!(out, "{value}");
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl FromStr for Template {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Template {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Template {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = <String as serde::Deserialize>::deserialize(deserializer)?;
        Template::parse(&source).map_err(serde::de::Error::custom)
    }
}

fn classify(pattern: &str, raw: &str, position: usize) -> Result<Segment, PatternError> {
    if raw.is_empty() {
        return Err(PatternError::EmptySegment {
            pattern: pattern.to_owned(),
            position,
        });
    }
    if raw == WILDCARD {
        return Err(PatternError::Wildcard {
            pattern: pattern.to_owned(),
            position,
        });
    }

    if let Some(inner) = raw.strip_prefix('{') {
        return match inner.strip_suffix('}') {
            Some(key) if is_variable_key(key) => Ok(Segment::Variable(key.to_owned())),
            _ => Err(PatternError::InvalidVariable {
                segment: raw.to_owned(),
            }),
        };
    }

    if is_literal(raw) {
        Ok(Segment::Literal(raw.to_owned()))
    } else {
        Err(PatternError::InvalidLiteral {
            segment: raw.to_owned(),
        })
    }
}

/// `true` if `key` is a valid variable name (`[a-z][a-z0-9_]*`).
pub fn is_variable_key(key: &str) -> bool {
    let mut bytes = key.bytes();
    matches!(bytes.next(), Some(b'a'..=b'z'))
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

fn is_literal(text: &str) -> bool {
    let mut bytes = text.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic()) && bytes.all(|b| b.is_ascii_alphanumeric())
}

fn is_placeholder(token: &str) -> bool {
    token.starts_with('{') && token.ends_with('}')
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
