//! Writing parsed names back into records.

use resname_pattern::WILDCARD;

use super::Namer;
use crate::binder;
use crate::record::SlotMut;
use crate::{NamerError, NamerResult, Record};

impl<R: Record> Namer<R> {
    /// Parse `name` into `record`, returning the index of the matched pattern.
    ///
    /// The lowest-index pattern whose literals match is used. A `-` segment
    /// leaves its field untouched. Fields are written in pattern order and
    /// are not rolled back if a later segment fails.
    pub fn parse(&self, name: &str, record: &mut R) -> NamerResult<usize> {
        let (pattern, tokens) = self
            .patterns
            .first_match(name)
            .ok_or_else(|| NamerError::InvalidName {
                name: name.to_owned(),
            })?;
        tracing::trace!(index = pattern.index(), pattern = pattern.template().as_str(), "parsed name");

        self.assign(record, pattern.template().keys(), &tokens)?;
        Ok(pattern.index())
    }

    /// Parse a parent name into `record`, returning the index of the pattern
    /// whose parent matched.
    ///
    /// The empty string is the root parent and matches the first root-level
    /// pattern without touching the record.
    pub fn parse_parent(&self, parent: &str, record: &mut R) -> NamerResult<usize> {
        let (pattern, tokens) = self
            .patterns
            .first_parent_match(parent)
            .ok_or_else(|| NamerError::InvalidParent {
                parent: parent.to_owned(),
            })?;
        tracing::trace!(index = pattern.index(), parent = pattern.parent().as_str(), "parsed parent");

        self.assign(record, pattern.parent().keys(), &tokens)?;
        Ok(pattern.index())
    }

    /// [`parse`](Self::parse), panicking on error.
    #[track_caller]
    pub fn must_parse(&self, name: &str, record: &mut R) -> usize {
        self.parse(name, record)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// [`parse_parent`](Self::parse_parent), panicking on error.
    #[track_caller]
    pub fn must_parse_parent(&self, parent: &str, record: &mut R) -> usize {
        self.parse_parent(parent, record)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    fn assign<'k>(
        &self,
        record: &mut R,
        keys: impl Iterator<Item = &'k str>,
        tokens: &[&str],
    ) -> NamerResult<()> {
        for (key, &token) in keys.zip(tokens) {
            let binding = self.bindings.get(key).ok_or_else(|| NamerError::InvalidField {
                key: key.to_owned(),
                type_name: self.bindings.type_name(),
            })?;

            // Checked before traversal so a wildcard never allocates.
            if token == WILDCARD {
                continue;
            }

            match binder::write(&mut *record, binding.path()) {
                SlotMut::Scalar(scalar) => {
                    scalar
                        .assign(token)
                        .map_err(|err| NamerError::InvalidFieldValue {
                            key: key.to_owned(),
                            value: token.to_owned(),
                            reason: err.to_string(),
                        })?;
                }
                other => {
                    return Err(NamerError::InvalidFieldType {
                        key: key.to_owned(),
                        type_name: self.bindings.type_name(),
                        found: other.describe(),
                    });
                }
            }
        }
        Ok(())
    }
}
