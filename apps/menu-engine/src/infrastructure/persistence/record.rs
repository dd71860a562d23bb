//! Persisted menu document shape.
//!
//! The JSON written to disk keeps the layout menus have always had:
//! combos live under `sections.combos`, category defaults sit next to item
//! prices in `prices`, and combo prices are repeated in `prices.combos`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::menu::{
    COMBOS_SECTION, ComboCategory, ComboDefinition, ComboModel, DiscountDefinition, MenuDocument,
    MenuError, PriceList, SectionContent,
};
use crate::domain::shared::{Money, Percent, names_match};

/// Whole amounts as JSON integers, fractional ones as floats.
mod amount {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.fract().is_zero()
            && let Some(whole) = value.to_i64()
        {
            return serializer.serialize_i64(whole);
        }
        match value.to_f64() {
            Some(float) => serializer.serialize_f64(float),
            None => serializer.serialize_str(&value.to_string()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}

/// A price or percent as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "amount")] pub Decimal);

impl From<Money> for Amount {
    fn from(value: Money) -> Self {
        Self(value.amount())
    }
}

/// Items of a section as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionRecord {
    /// `["Burger", "Fries"]`
    Flat(Vec<String>),
    /// `{"Hot": ["Tea"], "Cold": ["Soda"]}`
    Nested(BTreeMap<String, Vec<String>>),
}

/// Combo contents as stored; the shape depends on the combo model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComboItemsRecord {
    /// Category to item to quantity per unit.
    Quantities(BTreeMap<String, BTreeMap<String, u32>>),
    /// Category to eligible item names.
    Eligible(BTreeMap<String, Vec<String>>),
}

impl Default for ComboItemsRecord {
    fn default() -> Self {
        Self::Quantities(BTreeMap::new())
    }
}

/// A combo definition as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboRecord {
    /// Price of one unit or meal.
    pub price: Amount,
    /// Selects the mix-and-match model.
    #[serde(default)]
    pub mix_and_match: bool,
    /// Contents.
    #[serde(default)]
    pub combo_items: ComboItemsRecord,
    /// Per-meal caps by category; zeros for fixed combos.
    #[serde(default)]
    pub limits: BTreeMap<String, i64>,
}

/// The `sections` object: named sections plus the reserved `combos` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsRecord {
    /// Ordinary sections.
    #[serde(flatten)]
    pub sections: BTreeMap<String, SectionRecord>,
    /// Combo definitions.
    #[serde(default)]
    pub combos: BTreeMap<String, ComboRecord>,
}

/// A discount as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRecord {
    /// Whole percent.
    pub percent: Amount,
    /// Items and combos the discount does not reduce.
    #[serde(default)]
    pub bypass_items: Vec<String>,
}

/// The `prices` object: item prices and category defaults side by side,
/// combo prices nested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricesRecord {
    /// Item prices and category defaults.
    #[serde(flatten)]
    pub entries: BTreeMap<String, Amount>,
    /// Combo prices.
    #[serde(default)]
    pub combos: BTreeMap<String, Amount>,
}

/// One establishment's menu as written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    /// Sections, sub-sections, items and combos.
    #[serde(default)]
    pub sections: SectionsRecord,
    /// Item order limits.
    #[serde(default)]
    pub item_limits: BTreeMap<String, i64>,
    /// Discount definitions.
    #[serde(default)]
    pub discounts: BTreeMap<String, DiscountRecord>,
    /// Price table.
    #[serde(default)]
    pub prices: PricesRecord,
    /// Decorative menu image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_image_path: Option<String>,
}

fn non_negative_money(field: &str, amount: Amount) -> Result<Money, MenuError> {
    let money = Money::new(amount.0);
    money
        .validate_for_price(field)
        .map_err(|e| MenuError::malformed(field, amount.0, &e.to_string()))?;
    Ok(money)
}

fn non_negative_count(field: &str, value: i64) -> Result<u32, MenuError> {
    u32::try_from(value)
        .map_err(|_| MenuError::malformed(field, value, "must be a non-negative integer"))
}

fn category(field: &str, name: &str) -> Result<ComboCategory, MenuError> {
    ComboCategory::parse(name)
        .ok_or_else(|| MenuError::malformed(field, name, "must be food, drinks or desserts"))
}

fn section_content(record: SectionRecord) -> SectionContent {
    match record {
        SectionRecord::Flat(items) => SectionContent::Flat(items.into_iter().collect()),
        SectionRecord::Nested(groups) => SectionContent::Nested(
            groups
                .into_iter()
                .map(|(name, items)| (name, items.into_iter().collect()))
                .collect(),
        ),
    }
}

fn combo_definition(name: &str, record: ComboRecord) -> Result<ComboDefinition, MenuError> {
    let price = non_negative_money(&format!("combos.{name}.price"), record.price)?;
    let items_field = format!("combos.{name}.combo_items");
    let model = if record.mix_and_match {
        let mut eligible = BTreeMap::new();
        match record.combo_items {
            ComboItemsRecord::Eligible(groups) => {
                for (cat, items) in groups {
                    eligible.insert(category(&items_field, &cat)?, items.into_iter().collect());
                }
            }
            // Quantities left over from a model switch; keep the names.
            ComboItemsRecord::Quantities(groups) => {
                for (cat, items) in groups {
                    eligible.insert(category(&items_field, &cat)?, items.into_keys().collect());
                }
            }
        }
        let mut limits = BTreeMap::new();
        for (cat, limit) in record.limits {
            let field = format!("combos.{name}.limits.{cat}");
            limits.insert(category(&field, &cat)?, non_negative_count(&field, limit)?);
        }
        ComboModel::MixAndMatch { eligible, limits }
    } else {
        let mut items = BTreeMap::new();
        match record.combo_items {
            ComboItemsRecord::Quantities(groups) => {
                for (cat, quantities) in groups {
                    items.insert(category(&items_field, &cat)?, quantities);
                }
            }
            ComboItemsRecord::Eligible(groups) => {
                for (cat, names) in groups {
                    items.insert(
                        category(&items_field, &cat)?,
                        names.into_iter().map(|n| (n, 1)).collect(),
                    );
                }
            }
        }
        ComboModel::Fixed { items }
    };
    Ok(ComboDefinition::new(price, model))
}

impl TryFrom<MenuRecord> for MenuDocument {
    type Error = MenuError;

    fn try_from(record: MenuRecord) -> Result<Self, Self::Error> {
        let mut sections = BTreeMap::new();
        for (name, content) in record.sections.sections {
            if names_match(&name, COMBOS_SECTION) {
                return Err(MenuError::ReservedName { name });
            }
            sections.insert(name, section_content(content));
        }

        let mut combos = BTreeMap::new();
        for (name, combo) in record.sections.combos {
            let definition = combo_definition(&name, combo)?;
            combos.insert(name, definition);
        }

        let mut item_limits = BTreeMap::new();
        for (item, limit) in record.item_limits {
            let limit = non_negative_count(&format!("item_limits.{item}"), limit)?;
            item_limits.insert(item, limit);
        }

        let mut discounts = BTreeMap::new();
        for (name, discount) in record.discounts {
            let percent = Percent::new(discount.percent.0).map_err(|_| {
                MenuError::malformed(
                    &format!("discounts.{name}.percent"),
                    discount.percent.0,
                    "must be between 0 and 100",
                )
            })?;
            let bypass = discount.bypass_items.into_iter().collect();
            discounts.insert(name, DiscountDefinition::new(percent, bypass));
        }

        let mut prices = PriceList::new();
        for (key, amount) in record.prices.entries {
            let price = non_negative_money(&format!("prices.{key}"), amount)?;
            prices.set(&key, price);
        }
        for (name, amount) in record.prices.combos {
            let price = non_negative_money(&format!("prices.combos.{name}"), amount)?;
            prices.set_combo(&name, price);
        }

        Ok(Self::new(
            sections,
            combos,
            item_limits,
            discounts,
            prices,
            record.menu_image_path,
        ))
    }
}

fn combo_record(definition: &ComboDefinition) -> ComboRecord {
    let zero_limits = || {
        ComboCategory::ALL
            .into_iter()
            .map(|c| (c.as_str().to_string(), 0))
            .collect()
    };
    let (combo_items, limits) = match definition.model() {
        ComboModel::Fixed { items } => (
            ComboItemsRecord::Quantities(
                items
                    .iter()
                    .map(|(cat, quantities)| (cat.as_str().to_string(), quantities.clone()))
                    .collect(),
            ),
            zero_limits(),
        ),
        ComboModel::MixAndMatch { eligible, limits } => (
            ComboItemsRecord::Eligible(
                eligible
                    .iter()
                    .map(|(cat, items)| (cat.as_str().to_string(), items.iter().cloned().collect()))
                    .collect(),
            ),
            limits
                .iter()
                .map(|(cat, limit)| (cat.as_str().to_string(), i64::from(*limit)))
                .collect(),
        ),
    };
    ComboRecord {
        price: definition.price().into(),
        mix_and_match: definition.is_mix_and_match(),
        combo_items,
        limits,
    }
}

impl From<&MenuDocument> for MenuRecord {
    fn from(menu: &MenuDocument) -> Self {
        let sections = menu
            .sections()
            .iter()
            .map(|(name, content)| {
                let record = match content {
                    SectionContent::Flat(items) => {
                        SectionRecord::Flat(items.iter().cloned().collect())
                    }
                    SectionContent::Nested(groups) => SectionRecord::Nested(
                        groups
                            .iter()
                            .map(|(sub, items)| (sub.clone(), items.iter().cloned().collect()))
                            .collect(),
                    ),
                };
                (name.clone(), record)
            })
            .collect();

        let combos = menu
            .combos()
            .iter()
            .map(|(name, definition)| (name.clone(), combo_record(definition)))
            .collect();

        let discounts = menu
            .discounts()
            .iter()
            .map(|(name, discount)| {
                let record = DiscountRecord {
                    percent: Amount(discount.percent().value()),
                    bypass_items: discount.bypass_items().iter().cloned().collect(),
                };
                (name.clone(), record)
            })
            .collect();

        let prices = menu.prices();
        let entries = prices
            .category_defaults()
            .iter()
            .chain(prices.items())
            .map(|(key, price)| (key.clone(), Amount::from(*price)))
            .collect();

        Self {
            sections: SectionsRecord { sections, combos },
            item_limits: menu
                .item_limits()
                .iter()
                .map(|(item, limit)| (item.clone(), i64::from(*limit)))
                .collect(),
            discounts,
            prices: PricesRecord {
                entries,
                combos: prices
                    .combos()
                    .iter()
                    .map(|(name, price)| (name.clone(), Amount::from(*price)))
                    .collect(),
            },
            menu_image_path: menu.menu_image_path().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn stored() -> serde_json::Value {
        json!({
            "sections": {
                "food": ["Burger", "Fries"],
                "drinks": { "Cold": ["Soda"] },
                "desserts": [],
                "animal_treats": [],
                "combos": {
                    "Classic": {
                        "price": 12,
                        "mix_and_match": false,
                        "combo_items": { "food": { "Burger": 1 }, "drinks": { "Soda": 1 }, "desserts": {} },
                        "limits": { "food": 0, "drinks": 0, "desserts": 0 }
                    },
                    "Lunch": {
                        "price": 9.5,
                        "mix_and_match": true,
                        "combo_items": { "food": ["Burger", "Fries"], "drinks": [], "desserts": [] },
                        "limits": { "food": 2, "drinks": 0, "desserts": 0 }
                    }
                }
            },
            "item_limits": { "Burger": 3 },
            "discounts": { "Staff": { "percent": 10, "bypass_items": ["Classic"] } },
            "prices": { "food": 10, "drinks": 7, "animal_treat": 3, "Fries": 4.5, "combos": { "Classic": 12, "Lunch": 9.5 } },
            "menu_image_path": "menu.png"
        })
    }

    fn document() -> MenuDocument {
        let record: MenuRecord = serde_json::from_value(stored()).unwrap();
        MenuDocument::try_from(record).unwrap()
    }

    #[test]
    fn loads_stored_layout() {
        let menu = document();

        assert!(menu.section("DRINKS").unwrap().1.is_nested());
        assert_eq!(menu.item("soda").unwrap().subsection.as_deref(), Some("Cold"));
        let (_, lunch) = menu.combo("lunch").unwrap();
        assert!(lunch.is_mix_and_match());
        assert_eq!(lunch.limit(ComboCategory::Food), 2);
        assert_eq!(lunch.price(), Money::new(dec!(9.5)));
        assert_eq!(menu.item_limit("burger"), 3);
        assert!(menu.discount("staff").unwrap().1.bypasses("classic"));
        assert_eq!(menu.prices().lookup("Fries"), Some(Money::new(dec!(4.5))));
        assert_eq!(menu.prices().category_default("food"), Some(Money::whole(10)));
        assert_eq!(menu.menu_image_path(), Some("menu.png"));
    }

    #[test]
    fn writes_stored_layout() {
        let value = serde_json::to_value(MenuRecord::from(&document())).unwrap();
        assert_eq!(value, stored());
    }

    #[test]
    fn category_default_key_casing_survives_round_trip() {
        let mut value = stored();
        let prices = value["prices"].as_object_mut().unwrap();
        let food = prices.remove("food").unwrap();
        prices.insert("Food".to_string(), food);
        let record: MenuRecord = serde_json::from_value(value.clone()).unwrap();

        let menu = MenuDocument::try_from(record).unwrap();

        assert_eq!(serde_json::to_value(MenuRecord::from(&menu)).unwrap(), value);
    }

    #[test]
    fn starter_document_layout() {
        let value = serde_json::to_value(MenuRecord::from(&MenuDocument::starter())).unwrap();
        assert_eq!(
            value,
            json!({
                "sections": {
                    "food": [],
                    "drinks": {},
                    "desserts": [],
                    "animal_treats": [],
                    "combos": {}
                },
                "item_limits": {},
                "discounts": {},
                "prices": { "food": 10, "drinks": 7, "animal_treat": 3, "combos": {} }
            })
        );
    }

    #[test]
    fn rejects_negative_price() {
        let mut value = stored();
        value["prices"]["Fries"] = json!(-1);
        let record: MenuRecord = serde_json::from_value(value).unwrap();
        assert!(matches!(
            MenuDocument::try_from(record),
            Err(MenuError::MalformedInput { .. })
        ));
    }

    #[test]
    fn rejects_price_above_maximum() {
        let mut value = stored();
        value["prices"]["Fries"] = json!(2_000_000);
        let record: MenuRecord = serde_json::from_value(value).unwrap();
        assert!(matches!(
            MenuDocument::try_from(record),
            Err(MenuError::MalformedInput { .. })
        ));
    }

    #[test]
    fn rejects_percent_over_hundred() {
        let mut value = stored();
        value["discounts"]["Staff"]["percent"] = json!(150);
        let record: MenuRecord = serde_json::from_value(value).unwrap();
        assert!(matches!(
            MenuDocument::try_from(record),
            Err(MenuError::MalformedInput { .. })
        ));
    }

    #[test]
    fn rejects_negative_limit() {
        let mut value = stored();
        value["item_limits"]["Burger"] = json!(-2);
        let record: MenuRecord = serde_json::from_value(value).unwrap();
        assert!(matches!(
            MenuDocument::try_from(record),
            Err(MenuError::MalformedInput { .. })
        ));
    }

    #[test]
    fn amounts_keep_integer_form() {
        assert_eq!(serde_json::to_string(&Amount(dec!(10))).unwrap(), "10");
        assert_eq!(serde_json::to_string(&Amount(dec!(10.00))).unwrap(), "10");
        assert_eq!(serde_json::to_string(&Amount(dec!(4.5))).unwrap(), "4.5");
        let parsed: Amount = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, Amount(dec!(7)));
    }
}
