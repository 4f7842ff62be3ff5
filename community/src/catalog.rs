//! The validated table of rotating stat groups.

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::data::STAT_GROUPS;
use crate::types::{StatEntry, StatGroup};

/// Number of stat slots shown side by side.
pub const SLOT_COUNT: usize = 4;

/// Why a set of stat groups cannot form a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A slot would have nothing to show
    #[error("stat group {group} has no entries")]
    EmptyGroup {
        /// Index of the empty group
        group: usize,
    },
}

/// Exactly [`SLOT_COUNT`] non-empty stat groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCatalog {
    groups: [StatGroup; SLOT_COUNT],
}

static BUILTIN: Lazy<StatCatalog> = Lazy::new(|| StatCatalog {
    groups: STAT_GROUPS,
});

impl StatCatalog {
    /// Validate that every group has at least one entry.
    pub fn new(groups: [StatGroup; SLOT_COUNT]) -> Result<Self, CatalogError> {
        if let Some(group) = groups.iter().position(|g| g.is_empty()) {
            return Err(CatalogError::EmptyGroup { group });
        }
        Ok(Self { groups })
    }

    /// The stats published on the community page.
    pub fn builtin() -> &'static StatCatalog {
        &BUILTIN
    }

    /// Number of entries in the group shown by slot `index`.
    pub fn group_len(&self, index: usize) -> usize {
        self.groups[index].len()
    }

    /// Entry `index` of `group`. Panics when either is out of range.
    pub fn entry(&self, group: usize, index: usize) -> &'static StatEntry {
        &self.groups[group][index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_empty_group() {
        const ONE: &[StatEntry] = &[StatEntry::new("a", "1")];
        let err = StatCatalog::new([ONE, ONE, &[], ONE]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyGroup { group: 2 });
        assert_eq!(err.to_string(), "stat group 2 has no entries");
    }

    #[test]
    fn builtin_matches_published_table() {
        let catalog = StatCatalog::builtin();
        assert_eq!(catalog.group_len(0), 4);
        assert_eq!(catalog.group_len(1), 3);
        assert_eq!(catalog.entry(1, 2).title, "New Users Accounts");
        assert_eq!(StatCatalog::new(STAT_GROUPS).as_ref(), Ok(catalog));
    }
}
