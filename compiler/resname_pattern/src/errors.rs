//! Error types for template parsing and pattern set compilation.

use thiserror::Error;

/// A template string violates the resource-name template grammar, or a
/// template was rendered with the wrong number of values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The template string is empty.
    #[error("pattern is empty")]
    Empty,

    /// A segment between two `/` separators is empty (leading, trailing or
    /// doubled slash, or a `//service` full resource name).
    #[error("segment {position} of `{pattern}` is empty")]
    EmptySegment { pattern: String, position: usize },

    /// The wildcard `-` only appears in names, never in patterns.
    #[error("segment {position} of `{pattern}` is the wildcard `-`")]
    Wildcard { pattern: String, position: usize },

    /// A literal segment contains characters outside `[A-Za-z][A-Za-z0-9]*`.
    #[error("literal segment `{segment}` must be an ASCII letter followed by ASCII alphanumerics")]
    InvalidLiteral { segment: String },

    /// A variable segment is not `{lower_snake_case}`.
    #[error("variable segment `{segment}` must be a lower snake case name in braces")]
    InvalidVariable { segment: String },

    /// The template starts with a variable instead of a collection literal.
    #[error("pattern `{pattern}` must start with a literal segment")]
    LeadingVariable { pattern: String },

    /// Two variables or two literals are adjacent.
    #[error("segment {position} of `{pattern}` does not alternate between literal and variable")]
    NotAlternating { pattern: String, position: usize },

    /// The same variable key is bound twice in one template.
    #[error("variable `{key}` appears more than once in `{pattern}`")]
    DuplicateVariable { pattern: String, key: String },

    /// `render` received a different number of values than the template has
    /// variables.
    #[error("pattern `{pattern}` has {expected} variables, got {found} values")]
    Arity {
        pattern: String,
        expected: usize,
        found: usize,
    },
}

/// A pattern set could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// No declared patterns were supplied.
    #[error("no resource pattern declared")]
    NoPatterns,

    /// The declared patterns would run into the extra-pattern index range.
    #[error("{count} declared patterns overlap the extra pattern range starting at {offset}")]
    TooManyDeclared { count: usize, offset: usize },

    /// One of the templates is malformed.
    #[error("pattern {index} (`{pattern}`) is invalid: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: PatternError,
    },
}
