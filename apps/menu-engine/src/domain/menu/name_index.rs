//! Case-insensitive name index.
//!
//! Rebuilt from the document after every structural edit; never persisted.

use std::collections::BTreeMap;

use super::value_objects::{ComboDefinition, DiscountDefinition, SectionContent};
use crate::domain::shared::name_key;

/// An item resolved through the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedItem {
    /// Canonical item name.
    pub name: String,
    /// Canonical name of the section holding the item.
    pub section: String,
    /// Sub-section, if the section is nested.
    pub subsection: Option<String>,
}

impl IndexedItem {
    /// Lowercase section key used as the item's category.
    #[must_use]
    pub fn category(&self) -> String {
        name_key(&self.section)
    }
}

/// Lowercase name to canonical name, per kind of entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    sections: BTreeMap<String, String>,
    items: BTreeMap<String, IndexedItem>,
    combos: BTreeMap<String, String>,
    discounts: BTreeMap<String, String>,
}

impl NameIndex {
    /// Build the index for a document.
    ///
    /// When a name appears in several sections the first section (in stored
    /// order) wins. Items sharing a combo's name are left to the combo.
    #[must_use]
    pub fn build(
        sections: &BTreeMap<String, SectionContent>,
        combos: &BTreeMap<String, ComboDefinition>,
        discounts: &BTreeMap<String, DiscountDefinition>,
    ) -> Self {
        let combos: BTreeMap<String, String> =
            combos.keys().map(|c| (name_key(c), c.clone())).collect();

        let mut items = BTreeMap::new();
        for (section, content) in sections {
            let placed: Vec<(Option<&str>, &str)> = match content {
                SectionContent::Flat(names) => names.iter().map(|n| (None, n.as_str())).collect(),
                SectionContent::Nested(groups) => groups
                    .iter()
                    .flat_map(|(sub, names)| names.iter().map(move |n| (Some(sub.as_str()), n.as_str())))
                    .collect(),
            };
            for (subsection, name) in placed {
                let key = name_key(name);
                if combos.contains_key(&key) {
                    continue;
                }
                items.entry(key).or_insert_with(|| IndexedItem {
                    name: name.to_string(),
                    section: section.clone(),
                    subsection: subsection.map(ToString::to_string),
                });
            }
        }

        Self {
            sections: sections.keys().map(|s| (name_key(s), s.clone())).collect(),
            items,
            combos,
            discounts: discounts.keys().map(|d| (name_key(d), d.clone())).collect(),
        }
    }

    /// Canonical section name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(&name_key(name)).map(String::as_str)
    }

    /// Item lookup.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&IndexedItem> {
        self.items.get(&name_key(name))
    }

    /// Canonical combo name.
    #[must_use]
    pub fn combo(&self, name: &str) -> Option<&str> {
        self.combos.get(&name_key(name)).map(String::as_str)
    }

    /// Canonical discount name.
    #[must_use]
    pub fn discount(&self, name: &str) -> Option<&str> {
        self.discounts.get(&name_key(name)).map(String::as_str)
    }
}
