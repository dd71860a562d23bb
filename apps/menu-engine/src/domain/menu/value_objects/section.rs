//! Section content.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::shared::names_match;

/// Section name reserved for combo definitions.
pub const COMBOS_SECTION: &str = "combos";

/// Sub-section a flat section's items move into when it becomes nested.
pub const DEFAULT_SUBSECTION: &str = "default";

/// Items of one section: either a flat set or grouped by sub-section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Items directly in the section.
    Flat(BTreeSet<String>),
    /// Items grouped by sub-section name.
    Nested(BTreeMap<String, BTreeSet<String>>),
}

impl Default for SectionContent {
    fn default() -> Self {
        Self::Flat(BTreeSet::new())
    }
}

impl SectionContent {
    /// Empty nested section.
    #[must_use]
    pub const fn nested() -> Self {
        Self::Nested(BTreeMap::new())
    }

    /// Returns true if items are grouped by sub-section.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    /// All item names in the section, in stored order.
    pub fn items(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Flat(items) => Box::new(items.iter().map(String::as_str)),
            Self::Nested(groups) => Box::new(groups.values().flatten().map(String::as_str)),
        }
    }

    /// Number of items across all sub-sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Nested(groups) => groups.values().map(BTreeSet::len).sum(),
        }
    }

    /// Sub-section names; empty for a flat section.
    pub fn subsections(&self) -> impl Iterator<Item = &str> {
        let groups = match self {
            Self::Flat(_) => None,
            Self::Nested(groups) => Some(groups),
        };
        groups.into_iter().flat_map(|g| g.keys().map(String::as_str))
    }

    /// Canonical sub-section name matching `name` case-insensitively.
    #[must_use]
    pub fn find_subsection(&self, name: &str) -> Option<&str> {
        self.subsections().find(|s| names_match(s, name))
    }

    /// Canonical item name matching `name` case-insensitively.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&str> {
        self.items().find(|i| names_match(i, name))
    }

    /// Remove an item by exact name from wherever it lives. Returns true if removed.
    pub(crate) fn remove_item(&mut self, name: &str) -> bool {
        match self {
            Self::Flat(items) => items.remove(name),
            Self::Nested(groups) => groups.values_mut().any(|g| g.remove(name)),
        }
    }

    /// Convert a flat section to nested, moving existing items under `default`.
    pub(crate) fn make_nested(&mut self) {
        if let Self::Flat(items) = self {
            let mut groups = BTreeMap::new();
            if !items.is_empty() {
                groups.insert(DEFAULT_SUBSECTION.to_string(), std::mem::take(items));
            }
            *self = Self::Nested(groups);
        }
    }
}
