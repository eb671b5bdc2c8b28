//! The record-bound namer.
//!
//! A [`Namer`] pairs a compiled [`PatternSet`] with the [`FieldBindings`] of
//! one record type. Both are built at construction and shared read-only
//! afterwards, so a namer is cheap to clone and safe to use from any number
//! of threads.
//!
//! # Selection
//!
//! Every operation scans patterns in ascending index order and stops at the
//! first one that works. Formatting takes the first pattern whose variables
//! are all present; parsing takes the first pattern whose literals match. A
//! richer pattern at a higher index is never preferred.

mod format;
mod parse;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use resname_pattern::PatternSet;

use crate::binder::{BindingCache, FieldBindings};
use crate::{ConfigurationError, NamerOptions, NamerResult, Record, Resource};

/// Formats and parses resource names for record type `R`.
pub struct Namer<R: Record> {
    patterns: Arc<PatternSet>,
    bindings: Arc<FieldBindings>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Namer<R> {
    /// Compile `patterns` (plus any extras in `options`) and bind `R`.
    ///
    /// Fails if no pattern is given, a pattern is malformed, `R`'s fields
    /// cannot be bound, or, in strict mode, a pattern uses a key `R` does not
    /// bind.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(record = std::any::type_name::<R>(), declared = patterns.len())
    )]
    pub fn new<S: AsRef<str>>(patterns: &[S], options: NamerOptions) -> NamerResult<Self> {
        let set = PatternSet::compile(patterns, options.extra_patterns())?;
        let bindings = BindingCache::global().bindings::<R>()?;

        if options.strict_missing_bindings() {
            check_bindings(&set, &bindings)?;
        }

        tracing::debug!(
            patterns = set.len(),
            keys = bindings.len(),
            strict = options.strict_missing_bindings(),
            "compiled namer"
        );

        Ok(Self {
            patterns: Arc::new(set),
            bindings,
            _record: PhantomData,
        })
    }

    /// Build from the patterns `R` declares with `#[resname(pattern = ...)]`.
    pub fn for_resource(options: NamerOptions) -> NamerResult<Self>
    where
        R: Resource,
    {
        Self::new(R::DESCRIPTOR.patterns(), options)
    }

    #[inline]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    #[inline]
    pub fn bindings(&self) -> &FieldBindings {
        &self.bindings
    }
}

fn check_bindings(set: &PatternSet, bindings: &FieldBindings) -> Result<(), ConfigurationError> {
    for pattern in set {
        let template = pattern.template();
        if let Some(key) = template.keys().find(|key| !bindings.contains(key)) {
            return Err(ConfigurationError::MissingBinding {
                key: key.to_owned(),
                pattern: template.as_str().to_owned(),
                type_name: bindings.type_name(),
            });
        }
    }
    Ok(())
}

impl<R: Record> Clone for Namer<R> {
    fn clone(&self) -> Self {
        Self {
            patterns: Arc::clone(&self.patterns),
            bindings: Arc::clone(&self.bindings),
            _record: PhantomData,
        }
    }
}

impl<R: Record> fmt::Debug for Namer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namer")
            .field("record", &self.bindings.type_name())
            .field(
                "patterns",
                &self.patterns.iter().map(|p| p.template().as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
