//! Process-wide memo of field bindings per record type.

use std::any::TypeId;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::FieldBindings;
use crate::record::Record;
use crate::ConfigurationError;

/// Bindings keyed by record type.
///
/// Reads take a shared lock; a miss builds the bindings outside any lock and
/// then inserts under the write lock. Concurrent misses may both build; the
/// first insert wins.
#[derive(Default)]
pub struct BindingCache {
    entries: RwLock<FxHashMap<TypeId, Arc<FieldBindings>>>,
}

impl BindingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache shared by every namer in the process.
    pub fn global() -> &'static BindingCache {
        static GLOBAL: OnceLock<BindingCache> = OnceLock::new();
        GLOBAL.get_or_init(BindingCache::new)
    }

    /// Bindings for `R`, building them on first use.
    pub fn bindings<R: Record>(&self) -> Result<Arc<FieldBindings>, ConfigurationError> {
        let type_id = TypeId::of::<R>();

        // Fast path: already bound
        if let Some(entry) = self.entries.read().get(&type_id) {
            return Ok(Arc::clone(entry));
        }

        tracing::debug!(record = std::any::type_name::<R>(), "binding cache miss");
        let built = Arc::new(FieldBindings::of::<R>()?);

        // Double-check after acquiring write lock
        let mut entries = self.entries.write();
        let entry = entries.entry(type_id).or_insert(built);
        Ok(Arc::clone(entry))
    }

    /// Number of cached record types.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
