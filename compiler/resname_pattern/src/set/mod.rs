//! Indexed pattern sets.
//!
//! A [`PatternSet`] holds every pattern a resource type can be named by. The
//! declared patterns occupy indices `0..N`; caller-supplied extras start at
//! [`EXTRA_PATTERN_OFFSET`] so the declared list can grow without renumbering
//! anything callers may have persisted.
//!
//! Lookups are ordered linear scans: pattern sets are small, and the lowest
//! matching index is the observable contract.

use crate::template::Tokens;
use crate::{CompileError, Template};

/// Index of the first extra pattern.
pub const EXTRA_PATTERN_OFFSET: usize = 100;

/// A compiled pattern with its derived parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    index: usize,
    template: Template,
    parent: Template,
}

impl Pattern {
    pub fn new(index: usize, template: Template) -> Self {
        let parent = template.derive_parent();
        Self {
            index,
            template,
            parent,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The parent template; empty for root-level patterns.
    #[inline]
    pub fn parent(&self) -> &Template {
        &self.parent
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }
}

/// Every pattern of one resource type, ordered by index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile declared patterns and extras into a set.
    ///
    /// At least one declared pattern is required. Every template, declared or
    /// extra, must satisfy the template grammar.
    pub fn compile<D, E>(declared: &[D], extra: &[E]) -> Result<Self, CompileError>
    where
        D: AsRef<str>,
        E: AsRef<str>,
    {
        if declared.is_empty() {
            return Err(CompileError::NoPatterns);
        }
        if declared.len() > EXTRA_PATTERN_OFFSET {
            return Err(CompileError::TooManyDeclared {
                count: declared.len(),
                offset: EXTRA_PATTERN_OFFSET,
            });
        }

        let declared = declared.iter().map(AsRef::as_ref).enumerate();
        let extra = extra
            .iter()
            .map(AsRef::as_ref)
            .enumerate()
            .map(|(i, p)| (EXTRA_PATTERN_OFFSET + i, p));

        let patterns = declared
            .chain(extra)
            .map(|(index, pattern)| {
                Template::parse(pattern)
                    .map(|template| Pattern::new(index, template))
                    .map_err(|source| CompileError::InvalidPattern {
                        index,
                        pattern: pattern.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Compile a set with no extra patterns.
    pub fn from_declared<D: AsRef<str>>(declared: &[D]) -> Result<Self, CompileError> {
        Self::compile::<D, &str>(declared, &[])
    }

    /// Look up a pattern by its stable index.
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns
            .binary_search_by_key(&index, Pattern::index)
            .ok()
            .map(|pos| &self.patterns[pos])
    }

    /// Patterns in ascending index order.
    #[inline]
    pub fn as_slice(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Iterate in ascending index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always `false` for a compiled set; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.patterns.iter().map(Pattern::index)
    }

    /// The lowest-index pattern whose template matches `name`.
    pub fn first_match<'s, 'n>(&'s self, name: &'n str) -> Option<(&'s Pattern, Tokens<'n>)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.template.scan(name).map(|tokens| (pattern, tokens)))
    }

    /// The lowest-index pattern whose parent template matches `parent`.
    ///
    /// A root-level pattern's empty parent matches only the empty string.
    pub fn first_parent_match<'s, 'n>(
        &'s self,
        parent: &'n str,
    ) -> Option<(&'s Pattern, Tokens<'n>)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.parent.scan(parent).map(|tokens| (pattern, tokens)))
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
