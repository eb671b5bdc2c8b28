//! Resource types that declare their own name patterns.

use crate::Record;

/// Static description of a resource type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    resource_type: &'static str,
    patterns: &'static [&'static str],
}

impl ResourceDescriptor {
    pub const fn new(resource_type: &'static str, patterns: &'static [&'static str]) -> Self {
        Self {
            resource_type,
            patterns,
        }
    }

    /// The resource type, e.g. `library.example.com/Book`.
    pub fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    /// Declared patterns; position is the pattern index.
    pub fn patterns(&self) -> &'static [&'static str] {
        self.patterns
    }
}

/// A record that carries its patterns.
///
/// Implemented by `#[derive(Record)]` when the struct has
/// `#[resname(pattern = "...")]` attributes.
pub trait Resource: Record {
    const DESCRIPTOR: ResourceDescriptor;
}
