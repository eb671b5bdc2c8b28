//! Resname Pattern - Resource-name templates and pattern sets
//!
//! This crate knows nothing about records or fields. It owns:
//! - The template grammar (`parentOnes/{parent_one}/things/{thing}`)
//! - Structural matching of names against templates
//! - Rendering values into templates
//! - Parent template derivation
//! - Indexed pattern sets (declared patterns at `0..N`, extras from 100)
//!
//! # Design Philosophy
//!
//! - **Validate Once**: templates are checked when parsed, never again
//! - **Borrow Tokens**: matching hands back slices of the input name
//! - **Stable Indices**: extras never shift when declared patterns are added
//!
//! The derive macro in `resname_macros` depends on this crate to reject
//! malformed patterns at compile time, so it must stay free of runtime
//! concerns such as logging or caching.

mod errors;
mod set;
mod template;

pub use errors::{CompileError, PatternError};
pub use set::{Pattern, PatternSet, EXTRA_PATTERN_OFFSET};
pub use template::{is_variable_key, Segment, Template, Tokens, SEPARATOR, WILDCARD};
