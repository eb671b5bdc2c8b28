//! Error types for namer construction, formatting and parsing.
//!
//! Every failure is returned, never logged. Callers translate these into
//! their own vocabulary (an unmatched name is usually bad input, a
//! configuration error is usually a bug).
//!
//! # Categories
//!
//! - Construction: [`ConfigurationError`], wrapped as [`NamerError::Configuration`]
//! - Name matching: [`NamerError::InvalidName`], [`NamerError::InvalidParent`]
//! - Field access: [`NamerError::InvalidField`], [`NamerError::InvalidFieldType`],
//!   [`NamerError::InvalidFieldValue`]
//! - Selection: [`NamerError::InvalidPatternIndex`], [`NamerError::NoPatternFound`]

use std::fmt;

use resname_pattern::CompileError;
use thiserror::Error;

use crate::record::ContainerKind;

/// Result alias for namer operations.
pub type NamerResult<T> = Result<T, NamerError>;

/// What a format call was rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatTarget {
    Name,
    Parent,
}

impl fmt::Display for FormatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatTarget::Name => f.write_str("name"),
            FormatTarget::Parent => f.write_str("parent"),
        }
    }
}

/// Runtime failure of a namer operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NamerError {
    /// The name matches no compiled pattern.
    #[error("invalid name: `{name}` matches no pattern")]
    InvalidName { name: String },

    /// The parent matches no derived parent pattern.
    #[error("invalid parent: `{parent}` matches no parent pattern")]
    InvalidParent { parent: String },

    /// A pattern variable has no field binding in the record type.
    #[error("pattern key `{key}` is not bound to a field of `{type_name}`")]
    InvalidField {
        key: String,
        type_name: &'static str,
    },

    /// The bound field cannot hold the value the pattern carries.
    #[error("field bound to `{key}` in `{type_name}` is {found}, not a scalar")]
    InvalidFieldType {
        key: String,
        type_name: &'static str,
        found: &'static str,
    },

    /// A value is zero or empty where one is required, or does not parse
    /// as the field's kind.
    #[error("invalid value `{value}` for `{key}`: {reason}")]
    InvalidFieldValue {
        key: String,
        value: String,
        reason: String,
    },

    /// The selector names no pattern in the set.
    #[error("invalid pattern index: {index}")]
    InvalidPatternIndex { index: isize },

    /// No candidate pattern could be rendered from the record.
    #[error("no suitable {target} pattern found for `{type_name}`")]
    NoPatternFound {
        target: FormatTarget,
        type_name: &'static str,
        /// The diagnostic from the last candidate that got past the presence
        /// check, if any did.
        #[source]
        last: Option<Box<NamerError>>,
    },

    /// The namer could not be built.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Construction-time failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The declared or extra patterns do not compile.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Strict mode: a pattern variable has no field binding.
    #[error("pattern `{pattern}` uses key `{key}`, which no field of `{type_name}` binds")]
    MissingBinding {
        key: String,
        pattern: String,
        type_name: &'static str,
    },

    /// A container field carries an explicit binding key.
    #[error("field `{field}` of `{type_name}` is a {container} and cannot bind a pattern key")]
    AnnotatedContainer {
        field: &'static str,
        type_name: &'static str,
        container: ContainerKind,
    },

    /// A record type contains itself, directly or through other records.
    #[error("record `{type_name}` contains itself through field `{field}`")]
    RecursiveRecord {
        type_name: &'static str,
        field: &'static str,
    },
}

impl From<CompileError> for NamerError {
    fn from(err: CompileError) -> Self {
        NamerError::Configuration(ConfigurationError::Compile(err))
    }
}

impl NamerError {
    pub(crate) fn absent(key: &str, value: impl Into<String>) -> Self {
        NamerError::InvalidFieldValue {
            key: key.to_owned(),
            value: value.into(),
            reason: "value is zero or empty".to_owned(),
        }
    }

    /// `true` for construction-time errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, NamerError::Configuration(_))
    }
}
