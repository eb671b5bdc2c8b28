//! Resname - Hierarchical resource names for typed records
//!
//! Converts between records and slash-delimited resource names such as
//! `parentOnes/1/parentTwos/2/standardNamedResources/4`, resolved against
//! one or more patterns declared per resource type:
//!
//! ```text
//! #[derive(Record, Default)]
//! #[resname(
//!     pattern = "standardNamedResources/{standard_named_resource}",
//!     pattern = "parentOnes/{parent_one}/parentTwos/{parent_two}/standardNamedResources/{standard_named_resource}",
//! )]
//! struct StandardNamedResource {
//!     #[resname(key = "standard_named_resource")]
//!     id: i64,
//!     parent_one: i64,
//!     parent_two: i64,
//! }
//!
//! let namer = Namer::<StandardNamedResource>::for_resource(NamerOptions::default())?;
//! let name = namer.format(&record, as_pattern_index(1))?;
//! let index = namer.parse(&name, &mut parsed)?;
//! ```
//!
//! # Pieces
//!
//! - `resname_pattern`: template grammar, pattern sets, matching
//! - [`record`]: the field tables `#[derive(Record)]` generates
//! - [`binder`]: pattern key to field path, cached per type
//! - [`Namer`]: format, format parent, parse, parse parent
//! - [`explicit`]: closure-driven namers for parent/id pairs
//!
//! # Design Philosophy
//!
//! - **Build Once**: patterns compile and fields bind at construction
//! - **First Match Wins**: lowest pattern index, never "most specific"
//! - **Return, Don't Log**: every failure is a typed [`NamerError`]

// Lets `#[derive(Record)]` output (which names `::resname`) compile in this crate.
#[allow(unused_extern_crates)]
extern crate self as resname;

pub mod binder;
mod errors;
pub mod explicit;
mod namer;
mod options;
pub mod record;
mod resource;

pub use binder::{snake_case, BindingCache, FieldBinding, FieldBindings, FieldPath};
pub use errors::{ConfigurationError, FormatTarget, NamerError, NamerResult};
pub use explicit::{IdNamer, ParentIdNamer, ParentNamer};
pub use namer::Namer;
pub use options::{as_pattern_index, FormatOptions, NamerOptions, ALL_PATTERNS};
pub use record::{
    AssignError, CompositeShape, ContainerKind, Field, FieldDescriptor, Record, Scalar, Shape, Slot,
    SlotMut, Value, ValueKind,
};
pub use resource::{Resource, ResourceDescriptor};

pub use resname_macros::Record;

pub use resname_pattern::{
    CompileError, Pattern, PatternError, PatternSet, Segment, Template, EXTRA_PATTERN_OFFSET,
    WILDCARD,
};
