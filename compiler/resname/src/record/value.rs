//! Scalar values and their canonical text form.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// The value category a scalar field holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    SignedInteger,
    UnsignedInteger,
    Float,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::SignedInteger => "signed integer",
            ValueKind::UnsignedInteger => "unsigned integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
        };
        f.write_str(name)
    }
}

/// A borrowed scalar value.
///
/// `Display` renders the canonical segment form: decimal integers, the
/// shortest decimal that round-trips for floats, and strings verbatim.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
    Str(&'a str),
}

impl Value<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::SignedInteger,
            Value::Uint(_) => ValueKind::UnsignedInteger,
            Value::F32(_) | Value::F64(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::String,
        }
    }

    /// Zero, negative zero and the empty string count as absent.
    pub fn is_zero(&self) -> bool {
        match *self {
            Value::Int(v) => v == 0,
            Value::Uint(v) => v == 0,
            Value::F32(v) => v == 0.0,
            Value::F64(v) => v == 0.0,
            Value::Str(v) => v.is_empty(),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            // `Display` for floats never uses exponent notation and prints
            // the shortest digits that parse back to the same value.
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Str(v) => f.write_str(v),
        }
    }
}

/// A name segment did not parse as the field's kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}
