//! Rendering names from records.

use resname_pattern::{Pattern, Template};

use super::Namer;
use crate::binder;
use crate::errors::FormatTarget;
use crate::options::ALL_PATTERNS;
use crate::record::{Slot, Value};
use crate::{FormatOptions, NamerError, NamerResult, Record};

impl<R: Record> Namer<R> {
    /// Render the name of `record`.
    ///
    /// With the default options only pattern 0 is tried. With
    /// `as_pattern_index(-1)` every pattern is tried in index order and the
    /// first one whose variables are all present (non-zero, non-empty,
    /// non-`None`) wins.
    pub fn format(&self, record: &R, options: FormatOptions) -> NamerResult<String> {
        self.render(record, options, FormatTarget::Name)
    }

    /// Render the parent name of `record`.
    ///
    /// Like [`format`](Self::format), but against each candidate's parent
    /// pattern. Root-level patterns have no parent and are skipped.
    pub fn format_parent(&self, record: &R, options: FormatOptions) -> NamerResult<String> {
        self.render(record, options, FormatTarget::Parent)
    }

    /// [`format`](Self::format), panicking on error.
    #[track_caller]
    pub fn must_format(&self, record: &R, options: FormatOptions) -> String {
        self.format(record, options)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// [`format_parent`](Self::format_parent), panicking on error.
    #[track_caller]
    pub fn must_format_parent(&self, record: &R, options: FormatOptions) -> String {
        self.format_parent(record, options)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    fn render(&self, record: &R, options: FormatOptions, target: FormatTarget) -> NamerResult<String> {
        let mut last = None;
        for pattern in self.candidates(options)? {
            let template = match target {
                FormatTarget::Name => pattern.template(),
                FormatTarget::Parent if pattern.is_root() => continue,
                FormatTarget::Parent => pattern.parent(),
            };

            match self.render_template(record, template) {
                Ok(name) => {
                    tracing::trace!(
                        index = pattern.index(),
                        pattern = template.as_str(),
                        %target,
                        "formatted"
                    );
                    return Ok(name);
                }
                Err(err) => last = Some(Box::new(err)),
            }
        }

        Err(NamerError::NoPatternFound {
            target,
            type_name: self.bindings.type_name(),
            last,
        })
    }

    /// Patterns the selector allows, in index order.
    fn candidates(&self, options: FormatOptions) -> NamerResult<&[Pattern]> {
        let index = options.pattern_index();
        if index == ALL_PATTERNS {
            return Ok(self.patterns.as_slice());
        }

        let position = usize::try_from(index)
            .ok()
            .and_then(|index| self.patterns.iter().position(|p| p.index() == index))
            .ok_or(NamerError::InvalidPatternIndex { index })?;
        Ok(&self.patterns.as_slice()[position..=position])
    }

    fn render_template(&self, record: &R, template: &Template) -> NamerResult<String> {
        template.render_with(|key| self.value_of(record, key))
    }

    /// The present value bound to `key`.
    fn value_of<'r>(&self, record: &'r R, key: &str) -> NamerResult<Value<'r>> {
        let binding = self.bindings.get(key).ok_or_else(|| NamerError::InvalidField {
            key: key.to_owned(),
            type_name: self.bindings.type_name(),
        })?;

        match binder::read(record, binding.path()) {
            Slot::Scalar(scalar) => {
                let value = scalar.value();
                if value.is_zero() {
                    Err(NamerError::absent(key, value.to_string()))
                } else {
                    Ok(value)
                }
            }
            Slot::Nil => Err(NamerError::absent(key, "None")),
            other => Err(NamerError::InvalidFieldType {
                key: key.to_owned(),
                type_name: self.bindings.type_name(),
                found: other.describe(),
            }),
        }
    }
}
