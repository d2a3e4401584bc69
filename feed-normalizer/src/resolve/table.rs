//! Validated code → ID lookup table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::parse_digits;

use super::error::TableError;

/// An immutable, bijective mapping from operator codes to numeric IDs.
///
/// Construction checks that no code appears twice, that no two codes share
/// an ID, and that no code is digit-only (digit-only codes pass through as
/// their own value and would never reach the table). Aliases are extra codes
/// that resolve to the same ID as an existing primary code; they sit outside
/// the bijection.
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct CodeTable {
    name: &'static str,
    ids: HashMap<&'static str, i64>,
    aliases: HashMap<&'static str, &'static str>,
}

impl CodeTable {
    /// Build a table from `(code, id)` pairs.
    pub fn new(name: &'static str, entries: &[(&'static str, i64)]) -> Result<Self, TableError> {
        let mut ids = HashMap::with_capacity(entries.len());
        let mut owners: HashMap<i64, &'static str> = HashMap::with_capacity(entries.len());

        for &(code, id) in entries {
            if parse_digits(code).is_some() {
                return Err(TableError::NumericCode {
                    table: name,
                    code: code.to_string(),
                });
            }

            if ids.contains_key(code) {
                return Err(TableError::DuplicateCode {
                    table: name,
                    code: code.to_string(),
                });
            }

            match owners.entry(id) {
                Entry::Occupied(owner) => {
                    return Err(TableError::DuplicateId {
                        table: name,
                        id,
                        first: owner.get().to_string(),
                        second: code.to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(code);
                }
            }

            ids.insert(code, id);
        }

        Ok(Self {
            name,
            ids,
            aliases: HashMap::new(),
        })
    }

    /// Add `(alias, primary code)` pairs.
    ///
    /// Each alias must target a primary code already in the table and must
    /// not itself be a primary code, a numeric code, or a repeated alias.
    pub fn with_aliases(
        mut self,
        aliases: &[(&'static str, &'static str)],
    ) -> Result<Self, TableError> {
        for &(alias, target) in aliases {
            if parse_digits(alias).is_some() {
                return Err(TableError::NumericCode {
                    table: self.name,
                    code: alias.to_string(),
                });
            }
            if self.ids.contains_key(alias) {
                return Err(TableError::AliasShadowsCode {
                    table: self.name,
                    alias: alias.to_string(),
                });
            }
            if !self.ids.contains_key(target) {
                return Err(TableError::UnknownAliasTarget {
                    table: self.name,
                    alias: alias.to_string(),
                    target: target.to_string(),
                });
            }
            if self.aliases.insert(alias, target).is_some() {
                return Err(TableError::DuplicateCode {
                    table: self.name,
                    code: alias.to_string(),
                });
            }
        }
        Ok(self)
    }

    /// Look up a code, following aliases.
    pub fn get(&self, code: &str) -> Option<i64> {
        match self.ids.get(code) {
            Some(id) => Some(*id),
            None => self
                .aliases
                .get(code)
                .and_then(|target| self.ids.get(target).copied()),
        }
    }

    /// Number of primary codes (aliases excluded).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the table has no primary codes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over primary `(code, id)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.ids.iter().map(|(code, id)| (*code, *id))
    }
}
