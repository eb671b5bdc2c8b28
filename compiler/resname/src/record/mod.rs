//! The record model: a typed stand-in for runtime reflection.
//!
//! `#[derive(Record)]` generates, once per type, a table of the struct's fields
//! ([`FieldDescriptor`]) and positional accessors ([`Record::field`],
//! [`Record::field_mut`]). The binder walks the table to map pattern keys to
//! field paths; the formatter and parser then follow those paths through
//! [`Slot`] and [`SlotMut`] without any per-call type inspection.
//!
//! # Shapes
//!
//! Every field type reports a [`Shape`]:
//!
//! | Rust type | Shape |
//! |---|---|
//! | integers, floats, `String` | `Scalar` |
//! | another `#[derive(Record)]` struct | `Composite` |
//! | `Option<T>` | shape of `T`, marked as a pointer |
//! | `Box<T>` | shape of `T` |
//! | `Vec`, arrays, maps, sets, `fn` pointers | `Container` |
//! | `bool`, `char`, `()` | `Unsupported` |
//!
//! `Option` plays the role of a nil-able pointer: `None` is absent when
//! formatting, and parsing allocates `T::default()` on first write.

mod impls;
mod value;

use std::any::TypeId;
use std::fmt;

pub use value::{AssignError, Value, ValueKind};

/// A leaf value that a pattern variable can bind to.
pub trait Scalar {
    fn kind(&self) -> ValueKind;

    /// The current value, borrowed.
    fn value(&self) -> Value<'_>;

    /// Overwrite the value by parsing one name segment.
    ///
    /// Integers parse as base 10 at the field's own width, so a segment that
    /// does not fit the field is an error rather than a truncation.
    fn assign(&mut self, segment: &str) -> Result<(), AssignError>;
}

/// A type that can appear as a field of a [`Record`].
pub trait Field {
    fn shape() -> Shape
    where
        Self: Sized;

    fn slot(&self) -> Slot<'_>;

    /// Mutable access; for pointer-like fields this allocates on demand.
    fn slot_mut(&mut self) -> SlotMut<'_>;
}

/// A struct whose fields can be bound to pattern variables.
///
/// Implemented by `#[derive(Record)]`. Field indices count only the fields in
/// the table, so `#[resname(skip)]` fields take no index.
pub trait Record: 'static {
    /// The field table, in declaration order.
    fn fields() -> Vec<FieldDescriptor>
    where
        Self: Sized;

    fn field(&self, index: usize) -> Option<Slot<'_>>;

    fn field_mut(&mut self, index: usize) -> Option<SlotMut<'_>>;
}

/// One entry of a record's field table.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    name: &'static str,
    keys: &'static [&'static str],
    shape: Shape,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, keys: &'static [&'static str], shape: Shape) -> Self {
        Self { name, keys, shape }
    }

    /// The field name as declared (raw identifier prefix removed).
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Explicit binding keys; empty when the key derives from the name.
    #[inline]
    pub fn keys(&self) -> &'static [&'static str] {
        self.keys
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

/// How a field type participates in binding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// A bindable leaf.
    Scalar { kind: ValueKind, pointer: bool },
    /// A nested record, traversed when binding.
    Composite { layout: CompositeShape, pointer: bool },
    /// Never bindable; skipped unless annotated with a key.
    Container(ContainerKind),
    /// Never bindable; always skipped.
    Unsupported,
}

impl Shape {
    /// The shape of a nested record type.
    pub fn composite<R: Record>() -> Self {
        Shape::Composite {
            layout: CompositeShape {
                type_id: TypeId::of::<R>,
                type_name: std::any::type_name::<R>,
                fields: R::fields,
            },
            pointer: false,
        }
    }

    /// The same shape behind a nil-able pointer.
    #[must_use]
    pub fn pointer(self) -> Self {
        match self {
            Shape::Scalar { kind, .. } => Shape::Scalar {
                kind,
                pointer: true,
            },
            Shape::Composite { layout, .. } => Shape::Composite {
                layout,
                pointer: true,
            },
            other => other,
        }
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Shape::Scalar { .. } => "a scalar",
            Shape::Composite { .. } => "a record",
            Shape::Container(kind) => kind.describe(),
            Shape::Unsupported => "an unsupported type",
        }
    }
}

/// Lazily evaluated facts about a nested record type.
///
/// Stored as function pointers so that shapes stay `Copy` and a field table
/// can mention its own type without recursing at construction.
#[derive(Copy, Clone)]
pub struct CompositeShape {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    fields: fn() -> Vec<FieldDescriptor>,
}

impl CompositeShape {
    #[inline]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    pub fn fields(&self) -> Vec<FieldDescriptor> {
        (self.fields)()
    }
}

impl PartialEq for CompositeShape {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl fmt::Debug for CompositeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositeShape")
            .field(&self.type_name())
            .finish()
    }
}

/// Container categories that are skipped by the binder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Sequence,
    Set,
    Mapping,
    Callable,
}

impl ContainerKind {
    fn describe(self) -> &'static str {
        match self {
            ContainerKind::Sequence => "a sequence",
            ContainerKind::Set => "a set",
            ContainerKind::Mapping => "a mapping",
            ContainerKind::Callable => "a callable",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::Sequence => "sequence",
            ContainerKind::Set => "set",
            ContainerKind::Mapping => "mapping",
            ContainerKind::Callable => "callable",
        };
        f.write_str(name)
    }
}

/// Shared access to one field.
#[derive(Copy, Clone)]
pub enum Slot<'a> {
    Scalar(&'a dyn Scalar),
    Composite(&'a dyn Record),
    /// A `None` pointer.
    Nil,
    Unsupported,
}

impl<'a> Slot<'a> {
    /// The scalar value, or `None` for nil or non-scalar slots.
    pub fn value(self) -> Option<Value<'a>> {
        match self {
            Slot::Scalar(scalar) => Some(scalar.value()),
            _ => None,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Slot::Scalar(_) => "a scalar",
            Slot::Composite(_) => "a record",
            Slot::Nil => "nil",
            Slot::Unsupported => "an unsupported type",
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Scalar(scalar) => f.debug_tuple("Scalar").field(&scalar.value()).finish(),
            Slot::Composite(_) => f.write_str("Composite"),
            Slot::Nil => f.write_str("Nil"),
            Slot::Unsupported => f.write_str("Unsupported"),
        }
    }
}

/// Exclusive access to one field.
pub enum SlotMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Composite(&'a mut dyn Record),
    Unsupported,
}

impl SlotMut<'_> {
    pub fn describe(&self) -> &'static str {
        match self {
            SlotMut::Scalar(_) => "a scalar",
            SlotMut::Composite(_) => "a record",
            SlotMut::Unsupported => "an unsupported type",
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
