//! Editing operations on a menu document.
//!
//! Each operation checks its inputs and the current document first and only
//! then mutates, so a returned error leaves the document unchanged.

use std::collections::{BTreeMap, BTreeSet};

use super::MenuDocument;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::value_objects::{
    COMBOS_SECTION, ComboCategory, ComboDefinition, ComboModel, DEFAULT_SUBSECTION,
    DiscountDefinition, PriceList, SectionContent,
};
use crate::domain::shared::{Money, Percent, names_match};

fn clean_name(entity: &str, name: &str) -> Result<String, MenuError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(MenuError::EmptyName {
            entity: entity.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn check_price(field: &str, price: Money) -> Result<(), MenuError> {
    price
        .validate_for_price(field)
        .map_err(|e| MenuError::malformed(field, price.amount(), &e.to_string()))
}

impl MenuDocument {
    // ---------------------------------------------------------------------
    // Sections
    // ---------------------------------------------------------------------

    /// Add an empty flat section.
    ///
    /// # Errors
    ///
    /// Empty, reserved or duplicate (ignoring case) names are rejected.
    pub fn add_section(&mut self, name: &str) -> Result<String, MenuError> {
        let name = clean_name("Section", name)?;
        if names_match(&name, COMBOS_SECTION) {
            return Err(MenuError::ReservedName { name });
        }
        if let Some(existing) = self.index.section(&name) {
            return Err(MenuError::duplicate("Section", existing));
        }
        self.sections.insert(name.clone(), SectionContent::default());
        self.reindex();
        Ok(name)
    }

    /// Remove a section and forget everything tied to its items.
    ///
    /// # Errors
    ///
    /// Fails for `combos` and for unknown sections.
    pub fn remove_section(&mut self, name: &str) -> Result<(), MenuError> {
        if names_match(name.trim(), COMBOS_SECTION) {
            return Err(MenuError::ReservedName {
                name: name.trim().to_string(),
            });
        }
        let canonical = self
            .index
            .section(name.trim())
            .map(ToString::to_string)
            .ok_or_else(|| MenuError::not_found("Section", name))?;
        if let Some(content) = self.sections.remove(&canonical) {
            let items: Vec<String> = content.items().map(ToString::to_string).collect();
            for item in items {
                self.forget_item(&item);
            }
        }
        self.reindex();
        Ok(())
    }

    /// Add a sub-section, converting a flat section to nested first.
    ///
    /// Items of a converted section move under `default`.
    ///
    /// # Errors
    ///
    /// Unknown section, or a sub-section name already used in it.
    pub fn add_subsection(&mut self, section: &str, name: &str) -> Result<String, MenuError> {
        let name = clean_name("Sub-section", name)?;
        let canonical = self.canonical_section(section)?;
        let content = self
            .sections
            .get_mut(&canonical)
            .ok_or_else(|| MenuError::not_found("Section", section))?;
        let will_hold_default = !content.is_nested() && content.item_count() > 0;
        if let Some(existing) = content.find_subsection(&name) {
            return Err(MenuError::duplicate("Sub-section", existing));
        }
        if will_hold_default && names_match(&name, DEFAULT_SUBSECTION) {
            return Err(MenuError::duplicate("Sub-section", DEFAULT_SUBSECTION));
        }
        content.make_nested();
        if let SectionContent::Nested(groups) = content {
            groups.insert(name.clone(), BTreeSet::new());
        }
        self.reindex();
        Ok(name)
    }

    /// Remove a sub-section and forget everything tied to its items.
    ///
    /// # Errors
    ///
    /// Unknown section or sub-section.
    pub fn remove_subsection(&mut self, section: &str, name: &str) -> Result<(), MenuError> {
        let canonical = self.canonical_section(section)?;
        let removed = match self.sections.get_mut(&canonical) {
            Some(SectionContent::Nested(groups)) => {
                let key = groups
                    .keys()
                    .find(|k| names_match(k, name.trim()))
                    .cloned()
                    .ok_or_else(|| MenuError::not_found("Sub-section", name))?;
                groups.remove(&key).unwrap_or_default()
            }
            _ => return Err(MenuError::not_found("Sub-section", name)),
        };
        for item in &removed {
            self.forget_item(item);
        }
        self.reindex();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Items
    // ---------------------------------------------------------------------

    /// Add an item to a section.
    ///
    /// For a nested section without an explicit sub-section the item goes to
    /// `default`, which is created if needed.
    ///
    /// # Errors
    ///
    /// Unknown section or sub-section, a name already used by an item or
    /// combo, or a reserved price key.
    pub fn add_item(
        &mut self,
        section: &str,
        subsection: Option<&str>,
        name: &str,
    ) -> Result<String, MenuError> {
        let name = clean_name("Item", name)?;
        if PriceList::is_category_default_key(&name) || names_match(&name, COMBOS_SECTION) {
            return Err(MenuError::ReservedName { name });
        }
        if let Some(existing) = self.index.item(&name) {
            return Err(MenuError::duplicate("Item", &existing.name));
        }
        if let Some(existing) = self.index.combo(&name) {
            return Err(MenuError::duplicate("Combo", existing));
        }
        let canonical = self.canonical_section(section)?;
        let content = self
            .sections
            .get_mut(&canonical)
            .ok_or_else(|| MenuError::not_found("Section", section))?;

        match (content, subsection) {
            (SectionContent::Flat(items), None) => {
                items.insert(name.clone());
            }
            (SectionContent::Flat(_), Some(sub)) => {
                return Err(MenuError::not_found("Sub-section", sub));
            }
            (SectionContent::Nested(groups), sub) => {
                let wanted = sub.map_or(DEFAULT_SUBSECTION, str::trim);
                let key = groups.keys().find(|k| names_match(k, wanted)).cloned();
                let key = match (key, sub) {
                    (Some(key), _) => key,
                    (None, None) => DEFAULT_SUBSECTION.to_string(),
                    (None, Some(sub)) => return Err(MenuError::not_found("Sub-section", sub)),
                };
                groups.entry(key).or_default().insert(name.clone());
            }
        }
        self.reindex();
        Ok(name)
    }

    /// Remove an item and cascade to its limit, price, bypass entries and
    /// combo contents.
    ///
    /// # Errors
    ///
    /// Unknown section, sub-section or item.
    pub fn remove_item(
        &mut self,
        section: &str,
        subsection: Option<&str>,
        name: &str,
    ) -> Result<(), MenuError> {
        let canonical = self.canonical_section(section)?;
        let content = self
            .sections
            .get_mut(&canonical)
            .ok_or_else(|| MenuError::not_found("Section", section))?;

        let removed = match (content, subsection) {
            (SectionContent::Flat(_), Some(sub)) => {
                return Err(MenuError::not_found("Sub-section", sub));
            }
            (content, None) => {
                let item = content
                    .find_item(name.trim())
                    .map(ToString::to_string)
                    .ok_or_else(|| MenuError::not_found("Item", name))?;
                content.remove_item(&item);
                item
            }
            (SectionContent::Nested(groups), Some(sub)) => {
                let items = groups
                    .iter_mut()
                    .find(|(k, _)| names_match(k, sub.trim()))
                    .map(|(_, items)| items)
                    .ok_or_else(|| MenuError::not_found("Sub-section", sub))?;
                let item = items
                    .iter()
                    .find(|i| names_match(i, name.trim()))
                    .cloned()
                    .ok_or_else(|| MenuError::not_found("Item", name))?;
                items.remove(&item);
                item
            }
        };
        self.forget_item(&removed);
        self.reindex();
        Ok(())
    }

    /// Set an item's maximum order quantity; 0 removes the limit.
    ///
    /// # Errors
    ///
    /// Unknown item.
    pub fn set_item_limit(&mut self, item: &str, limit: u32) -> Result<(), MenuError> {
        let canonical = self
            .index
            .item(item.trim())
            .map(|i| i.name.clone())
            .ok_or_else(|| MenuError::not_found("Item", item))?;
        self.item_limits.retain(|k, _| !names_match(k, &canonical));
        if limit > 0 {
            self.item_limits.insert(canonical, limit);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Prices
    // ---------------------------------------------------------------------

    /// Set the price of an item, combo or category default.
    ///
    /// Combo prices are written both to the definition and to the combo
    /// price table.
    ///
    /// # Errors
    ///
    /// Negative price or unknown name.
    pub fn set_price(&mut self, name: &str, price: Money) -> Result<(), MenuError> {
        check_price("price", price)?;
        let name = name.trim();
        if let Some(combo) = self.index.combo(name).map(ToString::to_string) {
            if let Some(def) = self.combos.get_mut(&combo) {
                def.set_price(price);
            }
            self.prices.set_combo(&combo, price);
            return Ok(());
        }
        if PriceList::is_category_default_key(name) {
            self.prices.set(name, price);
            return Ok(());
        }
        let item = self
            .index
            .item(name)
            .map(|i| i.name.clone())
            .ok_or_else(|| MenuError::not_found("Item", name))?;
        self.prices.set(&item, price);
        Ok(())
    }

    /// Set a category default price (`food`, `drinks`, `desserts`, `animal_treat`).
    ///
    /// # Errors
    ///
    /// Negative price or a category without a default.
    pub fn set_category_default(&mut self, category: &str, price: Money) -> Result<(), MenuError> {
        check_price("price", price)?;
        if !PriceList::is_category_default_key(category.trim()) {
            return Err(MenuError::not_found("Category default", category));
        }
        self.prices.set(category.trim(), price);
        Ok(())
    }

    /// Remove an item's explicit price so it falls back to its category default.
    ///
    /// Combos always carry a price; clearing one resets it to zero.
    ///
    /// # Errors
    ///
    /// Unknown name.
    pub fn clear_price(&mut self, name: &str) -> Result<(), MenuError> {
        let name = name.trim();
        if let Some(combo) = self.index.combo(name).map(ToString::to_string) {
            if let Some(def) = self.combos.get_mut(&combo) {
                def.set_price(Money::ZERO);
            }
            self.prices.set_combo(&combo, Money::ZERO);
            return Ok(());
        }
        let item = self
            .index
            .item(name)
            .map(|i| i.name.clone())
            .ok_or_else(|| MenuError::not_found("Item", name))?;
        self.prices.remove_item(&item);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Combos
    // ---------------------------------------------------------------------

    /// Add a combo with empty contents and zero caps.
    ///
    /// # Errors
    ///
    /// Empty or duplicate name, or negative price.
    pub fn add_combo(
        &mut self,
        name: &str,
        price: Money,
        mix_and_match: bool,
    ) -> Result<String, MenuError> {
        let name = clean_name("Combo", name)?;
        check_price("price", price)?;
        if let Some(existing) = self.index.combo(&name) {
            return Err(MenuError::duplicate("Combo", existing));
        }
        if let Some(existing) = self.index.item(&name) {
            return Err(MenuError::duplicate("Item", &existing.name));
        }
        let mut items = BTreeMap::new();
        let mut eligible = BTreeMap::new();
        for category in ComboCategory::ALL {
            items.insert(category, BTreeMap::new());
            eligible.insert(category, BTreeSet::new());
        }
        let model = if mix_and_match {
            ComboModel::MixAndMatch {
                eligible,
                limits: ComboCategory::ALL.into_iter().map(|c| (c, 0)).collect(),
            }
        } else {
            ComboModel::Fixed { items }
        };
        self.combos
            .insert(name.clone(), ComboDefinition::new(price, model));
        self.prices.set_combo(&name, price);
        self.reindex();
        Ok(name)
    }

    /// Replace a combo's price and whole model.
    ///
    /// Item names are resolved to their canonical casing; entries with a
    /// fixed quantity of zero are dropped.
    ///
    /// # Errors
    ///
    /// Unknown combo or item, or negative price.
    pub fn update_combo(
        &mut self,
        name: &str,
        price: Money,
        model: ComboModel,
    ) -> Result<(), MenuError> {
        check_price("price", price)?;
        let canonical = self
            .index
            .combo(name.trim())
            .map(ToString::to_string)
            .ok_or_else(|| MenuError::not_found("Combo", name))?;
        let model = self.canonical_model(model)?;
        if let Some(def) = self.combos.get_mut(&canonical) {
            def.set_price(price);
            *def.model_mut() = model;
        }
        self.prices.set_combo(&canonical, price);
        Ok(())
    }

    /// Remove a combo, its price entry and any bypass references to it.
    ///
    /// # Errors
    ///
    /// Unknown combo.
    pub fn remove_combo(&mut self, name: &str) -> Result<(), MenuError> {
        let canonical = self
            .index
            .combo(name.trim())
            .map(ToString::to_string)
            .ok_or_else(|| MenuError::not_found("Combo", name))?;
        self.combos.remove(&canonical);
        self.prices.remove_combo(&canonical);
        for discount in self.discounts.values_mut() {
            discount.bypass_items_mut().remove(&canonical);
        }
        self.reindex();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Discounts
    // ---------------------------------------------------------------------

    /// Add a discount with no bypass items.
    ///
    /// # Errors
    ///
    /// Empty or duplicate name.
    pub fn add_discount(&mut self, name: &str, percent: Percent) -> Result<String, MenuError> {
        let name = clean_name("Discount", name)?;
        if let Some(existing) = self.index.discount(&name) {
            return Err(MenuError::duplicate("Discount", existing));
        }
        self.discounts
            .insert(name.clone(), DiscountDefinition::flat(percent));
        self.reindex();
        Ok(name)
    }

    /// Rename a discount and replace its percent and bypass set.
    ///
    /// # Errors
    ///
    /// Unknown discount, a new name already taken by another discount, or a
    /// bypass name that is neither an item nor a combo.
    pub fn update_discount(
        &mut self,
        name: &str,
        new_name: &str,
        percent: Percent,
        bypass: &BTreeSet<String>,
    ) -> Result<String, MenuError> {
        let current = self
            .index
            .discount(name.trim())
            .map(ToString::to_string)
            .ok_or_else(|| MenuError::not_found("Discount", name))?;
        let new_name = clean_name("Discount", new_name)?;
        if let Some(existing) = self.index.discount(&new_name)
            && existing != current
        {
            return Err(MenuError::duplicate("Discount", existing));
        }
        let bypass = bypass
            .iter()
            .map(|b| {
                self.resolve_priced_name(b.trim())
                    .ok_or_else(|| MenuError::not_found("Item", b))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let mut discount = self
            .discounts
            .remove(&current)
            .unwrap_or_else(|| DiscountDefinition::flat(percent));
        discount.set_percent(percent);
        *discount.bypass_items_mut() = bypass;
        self.discounts.insert(new_name.clone(), discount);
        self.reindex();
        Ok(new_name)
    }

    /// Remove a discount.
    ///
    /// # Errors
    ///
    /// Unknown discount.
    pub fn remove_discount(&mut self, name: &str) -> Result<(), MenuError> {
        let canonical = self
            .index
            .discount(name.trim())
            .map(ToString::to_string)
            .ok_or_else(|| MenuError::not_found("Discount", name))?;
        self.discounts.remove(&canonical);
        self.reindex();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Menu image
    // ---------------------------------------------------------------------

    /// Attach a menu image path or URL.
    ///
    /// # Errors
    ///
    /// Empty path.
    pub fn set_menu_image(&mut self, path: &str) -> Result<(), MenuError> {
        let path = clean_name("Menu image", path)?;
        self.menu_image_path = Some(path);
        Ok(())
    }

    /// Detach the menu image.
    pub fn clear_menu_image(&mut self) {
        self.menu_image_path = None;
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn canonical_section(&self, section: &str) -> Result<String, MenuError> {
        self.index
            .section(section.trim())
            .map(ToString::to_string)
            .ok_or_else(|| MenuError::not_found("Section", section))
    }

    /// Drop every reference to an item that is no longer on the menu.
    fn forget_item(&mut self, item: &str) {
        self.item_limits.remove(item);
        self.prices.remove_item(item);
        for discount in self.discounts.values_mut() {
            discount.bypass_items_mut().remove(item);
        }
        for combo in self.combos.values_mut() {
            combo.remove_item(item);
        }
    }

    fn canonical_item(&self, item: &str) -> Result<String, MenuError> {
        self.index
            .item(item.trim())
            .map(|i| i.name.clone())
            .ok_or_else(|| MenuError::not_found("Item", item))
    }

    fn canonical_model(&self, model: ComboModel) -> Result<ComboModel, MenuError> {
        match model {
            ComboModel::Fixed { items } => {
                let mut resolved = BTreeMap::new();
                for category in ComboCategory::ALL {
                    resolved.insert(category, BTreeMap::new());
                }
                for (category, entries) in items {
                    let slot = resolved.entry(category).or_default();
                    for (item, qty) in entries {
                        if qty > 0 {
                            slot.insert(self.canonical_item(&item)?, qty);
                        }
                    }
                }
                Ok(ComboModel::Fixed { items: resolved })
            }
            ComboModel::MixAndMatch { eligible, limits } => {
                let mut resolved = BTreeMap::new();
                for category in ComboCategory::ALL {
                    resolved.insert(category, BTreeSet::new());
                }
                for (category, entries) in eligible {
                    let slot = resolved.entry(category).or_default();
                    for item in entries {
                        slot.insert(self.canonical_item(&item)?);
                    }
                }
                let limits = ComboCategory::ALL
                    .into_iter()
                    .map(|c| (c, limits.get(&c).copied().unwrap_or(0)))
                    .collect();
                Ok(ComboModel::MixAndMatch {
                    eligible: resolved,
                    limits,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MenuDocument {
        let mut doc = MenuDocument::starter();
        doc.add_item("food", None, "Burger").unwrap();
        doc.add_item("food", None, "Fries").unwrap();
        doc.add_item("drinks", None, "Soda").unwrap();
        doc
    }

    #[test]
    fn add_section_rejects_duplicates_and_reserved() {
        let mut doc = MenuDocument::starter();
        assert_eq!(doc.add_section("  Specials ").unwrap(), "Specials");
        assert!(matches!(
            doc.add_section("SPECIALS"),
            Err(MenuError::DuplicateName { .. })
        ));
        assert!(matches!(
            doc.add_section("Combos"),
            Err(MenuError::ReservedName { .. })
        ));
        assert!(matches!(
            doc.add_section("   "),
            Err(MenuError::EmptyName { .. })
        ));
    }

    #[test]
    fn remove_section_cascades() {
        let mut doc = menu();
        doc.set_item_limit("Burger", 2).unwrap();
        doc.set_price("Burger", Money::whole(8)).unwrap();
        doc.remove_section("FOOD").unwrap();
        assert!(doc.section("food").is_none());
        assert!(doc.item("Burger").is_none());
        assert!(doc.item_limits().is_empty());
        assert!(doc.prices().items().is_empty());
        assert!(doc.remove_section("combos").is_err());
    }

    #[test]
    fn add_subsection_nests_flat_section_under_default() {
        let mut doc = menu();
        doc.add_subsection("Food", "Mains").unwrap();
        let (_, food) = doc.section("food").unwrap();
        assert!(food.is_nested());
        assert_eq!(food.find_subsection("default"), Some("default"));
        assert_eq!(food.find_subsection("mains"), Some("Mains"));
        assert_eq!(doc.item("burger").unwrap().subsection.as_deref(), Some("default"));
        assert!(doc.add_subsection("food", "MAINS").is_err());
    }

    #[test]
    fn add_item_to_nested_section_defaults_subsection() {
        let mut doc = MenuDocument::starter();
        doc.add_item("drinks", None, "Tea").unwrap();
        doc.add_subsection("drinks", "Cold").unwrap();
        doc.add_item("drinks", Some("cold"), "Lemonade").unwrap();
        assert_eq!(doc.item("tea").unwrap().subsection.as_deref(), Some("default"));
        assert_eq!(doc.item("lemonade").unwrap().subsection.as_deref(), Some("Cold"));
        assert!(matches!(
            doc.add_item("drinks", Some("Hot"), "Coffee"),
            Err(MenuError::NotFound { .. })
        ));
    }

    #[test]
    fn add_item_rejects_duplicates_across_sections() {
        let mut doc = menu();
        assert!(matches!(
            doc.add_item("desserts", None, "burger"),
            Err(MenuError::DuplicateName { .. })
        ));
        assert!(matches!(
            doc.add_item("food", None, "Drinks"),
            Err(MenuError::ReservedName { .. })
        ));
    }

    #[test]
    fn remove_item_cascades_to_limits_prices_and_bypass() {
        let mut doc = menu();
        doc.set_item_limit("fries", 3).unwrap();
        doc.set_price("fries", Money::whole(4)).unwrap();
        doc.add_discount("Staff", Percent::whole(20).unwrap()).unwrap();
        doc.update_discount(
            "Staff",
            "Staff",
            Percent::whole(20).unwrap(),
            &BTreeSet::from(["Fries".to_string(), "Burger".to_string()]),
        )
        .unwrap();

        doc.remove_item("food", None, "FRIES").unwrap();

        assert!(doc.item("Fries").is_none());
        assert_eq!(doc.item_limit("Fries"), 0);
        assert_eq!(doc.prices().lookup("Fries"), None);
        let (_, staff) = doc.discount("staff").unwrap();
        assert_eq!(staff.bypass_items(), &BTreeSet::from(["Burger".to_string()]));
    }

    #[test]
    fn set_item_limit_zero_removes_limit() {
        let mut doc = menu();
        doc.set_item_limit("burger", 2).unwrap();
        assert_eq!(doc.item_limits().get("Burger"), Some(&2));
        doc.set_item_limit("BURGER", 0).unwrap();
        assert!(doc.item_limits().is_empty());
        assert!(doc.set_item_limit("Pizza", 1).is_err());
    }

    #[test]
    fn set_price_routes_by_name_kind() {
        let mut doc = menu();
        doc.add_combo("Kids Meal", Money::whole(6), false).unwrap();

        doc.set_price("burger", Money::whole(9)).unwrap();
        doc.set_price("kids meal", Money::whole(7)).unwrap();
        doc.set_price("Desserts", Money::whole(4)).unwrap();

        assert_eq!(doc.prices().items().get("Burger"), Some(&Money::whole(9)));
        assert_eq!(doc.prices().combo_price("Kids Meal"), Some(Money::whole(7)));
        assert_eq!(doc.combo("Kids Meal").unwrap().1.price(), Money::whole(7));
        assert_eq!(doc.prices().category_default("desserts"), Some(Money::whole(4)));
        assert!(matches!(
            doc.set_price("burger", Money::from_cents(-1)),
            Err(MenuError::MalformedInput { .. })
        ));
    }

    #[test]
    fn clear_price_falls_back_to_default() {
        let mut doc = menu();
        doc.set_price("Burger", Money::whole(9)).unwrap();
        doc.clear_price("burger").unwrap();
        assert_eq!(doc.prices().lookup("Burger"), None);
    }

    #[test]
    fn add_combo_starts_empty() {
        let mut doc = menu();
        doc.add_combo("Lunch", Money::whole(12), true).unwrap();
        let (_, lunch) = doc.combo("lunch").unwrap();
        assert!(lunch.is_mix_and_match());
        for category in ComboCategory::ALL {
            assert_eq!(lunch.limit(category), 0);
        }
        assert_eq!(doc.prices().combo_price("Lunch"), Some(Money::whole(12)));
        assert!(doc.add_combo("LUNCH", Money::whole(1), false).is_err());
    }

    #[test]
    fn update_combo_switches_model_and_canonicalizes_items() {
        let mut doc = menu();
        doc.add_combo("Lunch", Money::whole(12), true).unwrap();
        let model = ComboModel::Fixed {
            items: BTreeMap::from([(
                ComboCategory::Food,
                BTreeMap::from([("burger".to_string(), 1), ("fries".to_string(), 0)]),
            )]),
        };
        doc.update_combo("lunch", Money::whole(11), model).unwrap();

        let (_, lunch) = doc.combo("Lunch").unwrap();
        assert!(!lunch.is_mix_and_match());
        assert_eq!(lunch.price(), Money::whole(11));
        let items: Vec<_> = lunch.fixed_items().collect();
        assert_eq!(items, vec![(ComboCategory::Food, "Burger", 1)]);

        let unknown = ComboModel::Fixed {
            items: BTreeMap::from([(
                ComboCategory::Food,
                BTreeMap::from([("Pizza".to_string(), 1)]),
            )]),
        };
        assert!(doc.update_combo("Lunch", Money::whole(11), unknown).is_err());
        assert_eq!(doc.combo("Lunch").unwrap().1.price(), Money::whole(11));
    }

    #[test]
    fn remove_combo_drops_price_entry() {
        let mut doc = menu();
        doc.add_combo("Lunch", Money::whole(12), false).unwrap();
        doc.remove_combo("lunch").unwrap();
        assert!(doc.combo("Lunch").is_none());
        assert!(doc.prices().combos().is_empty());
    }

    #[test]
    fn update_discount_renames_with_duplicate_check() {
        let mut doc = menu();
        doc.add_discount("Staff", Percent::whole(10).unwrap()).unwrap();
        doc.add_discount("Senior", Percent::whole(15).unwrap()).unwrap();

        assert!(matches!(
            doc.update_discount("staff", "SENIOR", Percent::ZERO, &BTreeSet::new()),
            Err(MenuError::DuplicateName { .. })
        ));
        let renamed = doc
            .update_discount("staff", "Employee", Percent::whole(25).unwrap(), &BTreeSet::new())
            .unwrap();
        assert_eq!(renamed, "Employee");
        assert!(doc.discount("Staff").is_none());
        assert_eq!(
            doc.discount("employee").unwrap().1.percent(),
            Percent::whole(25).unwrap()
        );
        // Same name in different casing is a rename, not a duplicate.
        doc.update_discount("employee", "EMPLOYEE", Percent::ZERO, &BTreeSet::new())
            .unwrap();
        assert_eq!(doc.discount("employee").unwrap().0, "EMPLOYEE");
    }

    #[test]
    fn update_discount_rejects_unknown_bypass() {
        let mut doc = menu();
        doc.add_discount("Staff", Percent::whole(10).unwrap()).unwrap();
        let bypass = BTreeSet::from(["Pizza".to_string()]);
        assert!(doc.update_discount("Staff", "Staff", Percent::ZERO, &bypass).is_err());
        assert_eq!(
            doc.discount("Staff").unwrap().1.percent(),
            Percent::whole(10).unwrap()
        );
    }

    #[test]
    fn menu_image_can_be_set_and_cleared() {
        let mut doc = menu();
        doc.set_menu_image("https://example.com/menu.png").unwrap();
        assert_eq!(doc.menu_image_path(), Some("https://example.com/menu.png"));
        doc.clear_menu_image();
        assert_eq!(doc.menu_image_path(), None);
    }
}
