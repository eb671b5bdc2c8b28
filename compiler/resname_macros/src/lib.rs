//! Procedural macros for resname.
//!
//! This crate provides the `Record` derive, which replaces runtime reflection
//! with a field table generated once per type. The table lists every field in
//! declaration order together with its binding keys and shape, and the
//! generated accessors reach each field by position.
//!
//! # Record Derive
//!
//! ```text
//! #[derive(Record, Default)]
//! #[resname(
//!     resource = "library.example.com/Book",
//!     pattern = "shelves/{shelf}/books/{book}",
//!     pattern = "books/{book}",
//! )]
//! pub struct Book {
//!     pub shelf: String,
//!     #[resname(key = "book")]
//!     pub id: u64,
//!     pub publisher: Option<Publisher>,
//!     #[resname(skip)]
//!     pub title: String,
//! }
//! ```
//!
//! This generates `Record` and `Field` implementations for `Book`, and since
//! patterns are declared, a `Resource` implementation carrying them.

mod record;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for record schemas.
///
/// # Attributes
///
/// ## Struct-level
/// - `#[resname(pattern = "...")]` - Declare a name pattern. Repeatable; the
///   order of declaration is the pattern index. Patterns are validated here.
/// - `#[resname(resource = "...")]` - Resource type; defaults to the struct name.
///   Only meaningful together with at least one pattern.
///
/// ## Field-level
/// - `#[resname(key = "a")]` - Bind this field to `{a}` instead of the
///   snake-cased field name. Repeatable, and `key = "a,b"` binds both keys.
/// - `#[resname(skip)]` - Leave the field out of the table.
///
/// # Example
///
/// ```text
/// #[derive(Record, Default)]
/// pub struct ParentTwo {
///     #[resname(key = "parent_two")]
///     pub id: i64,
///     pub parent_one: i64,
/// }
/// ```
///
/// Only structs with named fields and unit structs are supported.
#[proc_macro_derive(Record, attributes(resname))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
