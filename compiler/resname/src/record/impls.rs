//! `Scalar` and `Field` implementations for standard types.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::{AssignError, ContainerKind, Field, Scalar, Shape, Slot, SlotMut, Value, ValueKind};

macro_rules! scalar_field {
    ($ty:ty, $kind:expr) => {
        impl Field for $ty {
            fn shape() -> Shape {
                Shape::Scalar {
                    kind: $kind,
                    pointer: false,
                }
            }

            fn slot(&self) -> Slot<'_> {
                Slot::Scalar(self)
            }

            fn slot_mut(&mut self) -> SlotMut<'_> {
                SlotMut::Scalar(self)
            }
        }
    };
}

macro_rules! integer_scalar {
    ($kind:expr, $variant:ident, $wide:ty => $($ty:ty),*) => {$(
        impl Scalar for $ty {
            fn kind(&self) -> ValueKind {
                $kind
            }

            #[allow(
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::unnecessary_cast,
                reason = "pointer-sized integers are at most 64 bits on supported targets"
            )]
            fn value(&self) -> Value<'_> {
                Value::$variant(*self as $wide)
            }

            fn assign(&mut self, segment: &str) -> Result<(), AssignError> {
                *self = segment.parse::<$ty>()?;
                Ok(())
            }
        }

        scalar_field!($ty, $kind);
    )*};
}

integer_scalar!(ValueKind::SignedInteger, Int, i64 => i8, i16, i32, i64, isize);
integer_scalar!(ValueKind::UnsignedInteger, Uint, u64 => u8, u16, u32, u64, usize);

impl Scalar for f32 {
    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn value(&self) -> Value<'_> {
        Value::F32(*self)
    }

    fn assign(&mut self, segment: &str) -> Result<(), AssignError> {
        *self = segment.parse()?;
        Ok(())
    }
}

impl Scalar for f64 {
    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn value(&self) -> Value<'_> {
        Value::F64(*self)
    }

    fn assign(&mut self, segment: &str) -> Result<(), AssignError> {
        *self = segment.parse()?;
        Ok(())
    }
}

impl Scalar for String {
    fn kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn value(&self) -> Value<'_> {
        Value::Str(self)
    }

    fn assign(&mut self, segment: &str) -> Result<(), AssignError> {
        segment.clone_into(self);
        Ok(())
    }
}

scalar_field!(f32, ValueKind::Float);
scalar_field!(f64, ValueKind::Float);
scalar_field!(String, ValueKind::String);

// === Pointers ===

impl<T: Field + Default> Field for Option<T> {
    fn shape() -> Shape {
        T::shape().pointer()
    }

    fn slot(&self) -> Slot<'_> {
        match self {
            Some(inner) => inner.slot(),
            None => Slot::Nil,
        }
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        self.get_or_insert_with(T::default).slot_mut()
    }
}

impl<T: Field> Field for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn slot(&self) -> Slot<'_> {
        (**self).slot()
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        (**self).slot_mut()
    }
}

// === Skipped kinds ===

macro_rules! skipped_field {
    ($shape:expr; $($ty:ty $(where $($param:ident),+)?);* $(;)?) => {$(
        impl$(<$($param),+>)? Field for $ty {
            fn shape() -> Shape {
                $shape
            }

            fn slot(&self) -> Slot<'_> {
                Slot::Unsupported
            }

            fn slot_mut(&mut self) -> SlotMut<'_> {
                SlotMut::Unsupported
            }
        }
    )*};
}

skipped_field!(Shape::Container(ContainerKind::Sequence);
    Vec<T> where T;
    VecDeque<T> where T;
);
skipped_field!(Shape::Container(ContainerKind::Set);
    HashSet<T, S> where T, S;
    BTreeSet<T> where T;
);
skipped_field!(Shape::Container(ContainerKind::Mapping);
    HashMap<K, V, S> where K, V, S;
    BTreeMap<K, V> where K, V;
);
skipped_field!(Shape::Container(ContainerKind::Callable);
    fn() -> R where R;
    fn(A) -> R where A, R;
    fn(A, B) -> R where A, B, R;
    fn(A, B, C) -> R where A, B, C, R;
);
skipped_field!(Shape::Unsupported;
    bool;
    char;
    ();
);

impl<T, const N: usize> Field for [T; N] {
    fn shape() -> Shape {
        Shape::Container(ContainerKind::Sequence)
    }

    fn slot(&self) -> Slot<'_> {
        Slot::Unsupported
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Unsupported
    }
}
