//! Construction and format options.

/// Selector value meaning "try every pattern in index order".
pub const ALL_PATTERNS: isize = -1;

/// Options for building a [`Namer`](crate::Namer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamerOptions {
    extra_patterns: Vec<String>,
    strict_missing_bindings: bool,
}

impl Default for NamerOptions {
    fn default() -> Self {
        Self {
            extra_patterns: Vec::new(),
            strict_missing_bindings: true,
        }
    }
}

impl NamerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra patterns, numbered from 100 in the order given.
    #[must_use]
    pub fn with_extra_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Allow patterns whose keys the record type does not bind.
    ///
    /// Formatting or parsing with such a pattern then fails with
    /// `InvalidField` instead of construction failing.
    #[must_use]
    pub fn disable_strict_missing_bindings(mut self, disable: bool) -> Self {
        self.strict_missing_bindings = !disable;
        self
    }

    pub fn extra_patterns(&self) -> &[String] {
        &self.extra_patterns
    }

    pub fn strict_missing_bindings(&self) -> bool {
        self.strict_missing_bindings
    }
}

/// Options for a single format call.
///
/// Defaults to pattern index 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pattern_index: isize,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try every pattern, lowest index first.
    pub fn all() -> Self {
        as_pattern_index(ALL_PATTERNS)
    }

    /// Select one pattern (`index >= 0`) or all of them (`-1`).
    ///
    /// Other negative values are accepted here and rejected when formatting.
    #[must_use]
    pub fn as_pattern_index(mut self, index: isize) -> Self {
        self.pattern_index = index;
        self
    }

    pub fn pattern_index(&self) -> isize {
        self.pattern_index
    }
}

/// Shorthand for `FormatOptions::new().as_pattern_index(index)`.
pub fn as_pattern_index(index: isize) -> FormatOptions {
    FormatOptions::new().as_pattern_index(index)
}
