//! Menu document aggregate.

use std::collections::BTreeMap;

use crate::domain::menu::name_index::{IndexedItem, NameIndex};
use crate::domain::menu::value_objects::{
    ComboDefinition, DiscountDefinition, PriceList, SectionContent,
};
use crate::domain::shared::names_match;

/// One establishment's menu.
///
/// Names keep the casing they were entered with. Lookups through the
/// accessors below ignore case and hand back the canonical name.
///
/// Combos live in their own map rather than under a `combos` section; the
/// persisted record puts them back under `sections.combos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDocument {
    pub(super) sections: BTreeMap<String, SectionContent>,
    pub(super) combos: BTreeMap<String, ComboDefinition>,
    pub(super) item_limits: BTreeMap<String, u32>,
    pub(super) discounts: BTreeMap<String, DiscountDefinition>,
    pub(super) prices: PriceList,
    pub(super) menu_image_path: Option<String>,
    pub(super) index: NameIndex,
}

impl MenuDocument {
    /// Assemble a document from already-validated parts.
    #[must_use]
    pub fn new(
        sections: BTreeMap<String, SectionContent>,
        combos: BTreeMap<String, ComboDefinition>,
        item_limits: BTreeMap<String, u32>,
        discounts: BTreeMap<String, DiscountDefinition>,
        prices: PriceList,
        menu_image_path: Option<String>,
    ) -> Self {
        let mut doc = Self {
            sections,
            combos,
            item_limits,
            discounts,
            prices,
            menu_image_path,
            index: NameIndex::default(),
        };
        doc.reindex();
        doc
    }

    /// The document a store hands out for an establishment it has never seen.
    ///
    /// Sections `food`, `desserts` and `animal_treats` are flat, `drinks` is
    /// nested. Category defaults are food 10, drinks 7, `animal_treat` 3.
    #[must_use]
    pub fn starter() -> Self {
        let sections = BTreeMap::from([
            ("food".to_string(), SectionContent::default()),
            ("drinks".to_string(), SectionContent::nested()),
            ("desserts".to_string(), SectionContent::default()),
            ("animal_treats".to_string(), SectionContent::default()),
        ]);
        Self::new(
            sections,
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            PriceList::starter(),
            None,
        )
    }

    pub(super) fn reindex(&mut self) {
        self.index = NameIndex::build(&self.sections, &self.combos, &self.discounts);
    }

    /// All sections except combos.
    #[must_use]
    pub const fn sections(&self) -> &BTreeMap<String, SectionContent> {
        &self.sections
    }

    /// Section by name, ignoring case.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<(&str, &SectionContent)> {
        let canonical = self.index.section(name)?;
        self.sections
            .get_key_value(canonical)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Combo definitions.
    #[must_use]
    pub const fn combos(&self) -> &BTreeMap<String, ComboDefinition> {
        &self.combos
    }

    /// Combo by name, ignoring case.
    #[must_use]
    pub fn combo(&self, name: &str) -> Option<(&str, &ComboDefinition)> {
        let canonical = self.index.combo(name)?;
        self.combos
            .get_key_value(canonical)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Discount definitions.
    #[must_use]
    pub const fn discounts(&self) -> &BTreeMap<String, DiscountDefinition> {
        &self.discounts
    }

    /// Discount by name, ignoring case.
    #[must_use]
    pub fn discount(&self, name: &str) -> Option<(&str, &DiscountDefinition)> {
        let canonical = self.index.discount(name)?;
        self.discounts
            .get_key_value(canonical)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Per-item order limits.
    #[must_use]
    pub const fn item_limits(&self) -> &BTreeMap<String, u32> {
        &self.item_limits
    }

    /// Order limit for an item; 0 when unlimited.
    #[must_use]
    pub fn item_limit(&self, item: &str) -> u32 {
        self.item_limits
            .get(item)
            .or_else(|| {
                self.item_limits
                    .iter()
                    .find(|(k, _)| names_match(k, item))
                    .map(|(_, limit)| limit)
            })
            .copied()
            .unwrap_or(0)
    }

    /// Price table.
    #[must_use]
    pub const fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Decorative menu image (path or URL).
    #[must_use]
    pub fn menu_image_path(&self) -> Option<&str> {
        self.menu_image_path.as_deref()
    }

    /// Item by name, ignoring case.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&IndexedItem> {
        self.index.item(name)
    }

    /// Case-insensitive name index.
    #[must_use]
    pub const fn index(&self) -> &NameIndex {
        &self.index
    }

    /// Canonical name of an item or combo.
    pub(super) fn resolve_priced_name(&self, name: &str) -> Option<String> {
        self.index
            .combo(name)
            .map(ToString::to_string)
            .or_else(|| self.index.item(name).map(|i| i.name.clone()))
    }
}

impl Default for MenuDocument {
    fn default() -> Self {
        Self::starter()
    }
}
