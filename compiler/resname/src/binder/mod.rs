//! Field binding: which record field each pattern key reads and writes.
//!
//! Bindings are built once per record type from its field table and cached
//! process-wide (see [`BindingCache`]). A binding is a path of field indices
//! from the root record down to a scalar leaf, following nested records.
//!
//! # Traversal Order
//!
//! At each record the binder visits every scalar field in declaration order,
//! then descends into every nested record in declaration order. When two
//! fields bind the same key the later visit wins, so a key on a root scalar
//! is shadowed by the same key inside a nested record.

mod cache;

use std::any::TypeId;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::record::{FieldDescriptor, Record, Shape, Slot, SlotMut, ValueKind};
use crate::ConfigurationError;

pub use cache::BindingCache;

/// Field indices from the root record to a leaf.
pub type FieldPath = SmallVec<[usize; 4]>;

/// Where one pattern key lives in a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldBinding {
    key: String,
    path: FieldPath,
    kind: ValueKind,
    pointer: bool,
    field: &'static str,
}

impl FieldBinding {
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// `true` if the leaf is an `Option`.
    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.pointer
    }

    /// Name of the leaf field.
    #[inline]
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Every key a record type binds.
#[derive(Clone, Debug, Default)]
pub struct FieldBindings {
    type_name: &'static str,
    bindings: FxHashMap<String, FieldBinding>,
}

impl FieldBindings {
    /// Walk `R`'s field table and bind every scalar.
    #[tracing::instrument(level = "debug", skip_all, fields(record = std::any::type_name::<R>()))]
    pub fn of<R: Record>() -> Result<Self, ConfigurationError> {
        let type_name = std::any::type_name::<R>();
        let mut binder = Binder {
            bindings: FxHashMap::default(),
            stack: vec![TypeId::of::<R>()],
            path: FieldPath::new(),
        };
        binder.visit(type_name, &R::fields())?;

        tracing::debug!(keys = binder.bindings.len(), "bound record fields");
        Ok(Self {
            type_name,
            bindings: binder.bindings,
        })
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&FieldBinding> {
        self.bindings.get(key)
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// The record type these bindings were built for.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldBinding> + '_ {
        self.bindings.values()
    }
}

struct Binder {
    bindings: FxHashMap<String, FieldBinding>,
    /// Records on the current path, root first.
    stack: Vec<TypeId>,
    path: FieldPath,
}

impl Binder {
    fn visit(&mut self, type_name: &'static str, fields: &[FieldDescriptor]) -> Result<(), ConfigurationError> {
        for (index, field) in fields.iter().enumerate() {
            match field.shape() {
                Shape::Scalar { kind, pointer } => self.bind(index, field, kind, pointer),
                Shape::Container(container) if !field.keys().is_empty() => {
                    return Err(ConfigurationError::AnnotatedContainer {
                        field: field.name(),
                        type_name,
                        container,
                    });
                }
                Shape::Container(_) | Shape::Composite { .. } | Shape::Unsupported => {}
            }
        }

        for (index, field) in fields.iter().enumerate() {
            let Shape::Composite { layout, .. } = field.shape() else {
                continue;
            };
            let type_id = layout.type_id();
            if self.stack.contains(&type_id) {
                return Err(ConfigurationError::RecursiveRecord {
                    type_name: layout.type_name(),
                    field: field.name(),
                });
            }

            self.stack.push(type_id);
            self.path.push(index);
            self.visit(layout.type_name(), &layout.fields())?;
            self.path.pop();
            self.stack.pop();
        }

        Ok(())
    }

    fn bind(&mut self, index: usize, field: &FieldDescriptor, kind: ValueKind, pointer: bool) {
        let mut path = self.path.clone();
        path.push(index);

        let keys: SmallVec<[String; 1]> = if field.keys().is_empty() {
            smallvec::smallvec![snake_case(field.name())]
        } else {
            field.keys().iter().map(|key| (*key).to_owned()).collect()
        };

        for key in keys {
            let binding = FieldBinding {
                key: key.clone(),
                path: path.clone(),
                kind,
                pointer,
                field: field.name(),
            };
            if let Some(shadowed) = self.bindings.insert(key, binding) {
                tracing::trace!(key = shadowed.key(), field = shadowed.field(), "binding shadowed");
            }
        }
    }
}

/// Snake-case a field name.
///
/// Spaces and `-` become `_`, an `_` goes before any uppercase ASCII letter
/// that follows a lowercase one, and everything is lowercased. Names that are
/// already snake case come back unchanged.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c == ' ' || c == '-' {
            out.push('_');
        } else {
            if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    out
}

/// Follow `path` for reading. A `None` anywhere on the way reads as nil.
pub(crate) fn read<'r>(root: &'r dyn Record, path: &[usize]) -> Slot<'r> {
    let Some((&leaf, ancestors)) = path.split_last() else {
        return Slot::Unsupported;
    };

    let mut current = root;
    for &index in ancestors {
        match current.field(index) {
            Some(Slot::Composite(next)) => current = next,
            Some(Slot::Nil) => return Slot::Nil,
            _ => return Slot::Unsupported,
        }
    }
    current.field(leaf).unwrap_or(Slot::Unsupported)
}

/// Follow `path` for writing, allocating `None` records on the way.
pub(crate) fn write<'r>(root: &'r mut dyn Record, path: &[usize]) -> SlotMut<'r> {
    let Some((&leaf, ancestors)) = path.split_last() else {
        return SlotMut::Unsupported;
    };

    let mut current = root;
    for &index in ancestors {
        match current.field_mut(index) {
            Some(SlotMut::Composite(next)) => current = next,
            _ => return SlotMut::Unsupported,
        }
    }
    current.field_mut(leaf).unwrap_or(SlotMut::Unsupported)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
