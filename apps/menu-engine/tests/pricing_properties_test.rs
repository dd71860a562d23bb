//! Pricing and limit integration tests.
//!
//! Exercises the public API end to end: a menu built through the editing
//! operations, orders built through `Order`, totals from `price` and limit
//! checks from `validate`.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_case::test_case;

use menu_engine::{
    ComboCategory, ComboModel, ComboOrder, LimitViolation, MenuDocument, Money, Order, Percent,
    expand, price, resolve_price, validate,
};

// =============================================================================
// Fixtures
// =============================================================================

/// Food: Burger (priced under a mixed-case key), Fries (default price).
/// Drinks: Soda. Animal treats: Bone.
/// Combos: Classic (fixed, 12.00), Lunch (mix-and-match, 9.00, food cap 2).
/// Discounts: Half (50%, bypasses Bone), Tenth (10%).
fn menu() -> MenuDocument {
    let mut doc = MenuDocument::starter();
    doc.add_item("food", None, "BuRger").unwrap();
    doc.add_item("food", None, "Fries").unwrap();
    doc.add_item("drinks", None, "Soda").unwrap();
    doc.add_item("animal_treats", None, "Bone").unwrap();
    doc.set_price("BuRger", Money::whole(20)).unwrap();
    doc.set_price("Bone", Money::whole(20)).unwrap();

    doc.add_combo("Classic", Money::whole(12), false).unwrap();
    doc.update_combo(
        "Classic",
        Money::whole(12),
        ComboModel::Fixed {
            items: BTreeMap::from([
                (ComboCategory::Food, BTreeMap::from([("BuRger".to_string(), 1)])),
                (ComboCategory::Drinks, BTreeMap::from([("Soda".to_string(), 1)])),
            ]),
        },
    )
    .unwrap();

    doc.add_combo("Lunch", Money::whole(9), true).unwrap();
    doc.update_combo(
        "Lunch",
        Money::whole(9),
        ComboModel::MixAndMatch {
            eligible: BTreeMap::from([(
                ComboCategory::Food,
                BTreeSet::from(["BuRger".to_string(), "Fries".to_string()]),
            )]),
            limits: BTreeMap::from([(ComboCategory::Food, 2)]),
        },
    )
    .unwrap();

    doc.add_discount("Half", Percent::whole(50).unwrap()).unwrap();
    doc.update_discount(
        "Half",
        "Half",
        Percent::whole(50).unwrap(),
        &BTreeSet::from(["Bone".to_string()]),
    )
    .unwrap();
    doc.add_discount("Tenth", Percent::whole(10).unwrap()).unwrap();
    doc
}

/// Burger 20 x4 = 80 and Bone 20 x1 = 20: subtotal 100.
fn hundred_order(menu: &MenuDocument) -> Order {
    let mut order = Order::new();
    order.add_item(menu, "burger", 4);
    order.add_item(menu, "bone", 1);
    order
}

// =============================================================================
// Price resolution
// =============================================================================

#[test_case("BuRger" ; "stored case")]
#[test_case("burger" ; "lower case")]
#[test_case("BURGER" ; "upper case")]
fn price_lookup_ignores_query_case(query: &str) {
    let menu = menu();
    assert_eq!(resolve_price(query, Some("food"), &menu), Money::whole(20));
}

#[test]
fn unpriced_item_uses_category_default() {
    let mut menu = menu();
    assert_eq!(resolve_price("Fries", Some("food"), &menu), Money::whole(10));

    menu.set_category_default("food", Money::from_cents(450))
        .unwrap();
    assert_eq!(
        resolve_price("Fries", Some("food"), &menu),
        Money::from_cents(450)
    );
}

#[test]
fn unknown_name_without_category_is_free() {
    assert_eq!(resolve_price("Mystery", None, &menu()), Money::ZERO);
}

#[test]
fn oversized_price_is_rejected_at_entry() {
    let mut menu = menu();
    assert!(menu_engine::domain::menu::parse_price("5e28").is_err());
    assert!(menu.set_price("BuRger", Money::whole(2_000_000)).is_err());
    assert_eq!(resolve_price("BuRger", Some("food"), &menu), Money::whole(20));
}

#[test]
fn extreme_quantities_price_without_overflow() {
    let mut menu = menu();
    menu.set_price("BuRger", Money::MAX_PRICE).unwrap();
    let mut order = Order::new();
    order.add_item(&menu, "burger", u32::MAX);
    order.set_fixed_combo("Classic", u32::MAX);
    order.toggle_discount("Half", true);
    order.set_custom_discount(Some(dec!(10)));

    let total = price(&order, &menu);

    assert!(!total.is_negative());
    assert!(total < Money::MAX_PRICE * u32::MAX + Money::whole(12) * u32::MAX);
}

// =============================================================================
// Combos
// =============================================================================

#[test]
fn fixed_combo_priced_flat_per_unit() {
    let menu = menu();
    let mut order = Order::new();
    order.set_fixed_combo("classic", 3);

    assert_eq!(price(&order, &menu), Money::whole(36));

    let (name, definition) = menu.combo("Classic").unwrap();
    let expansion = expand(name, definition, &order.combos()["classic"]);
    let totals = expansion.item_totals();
    assert_eq!(totals["BuRger"], 3);
    assert_eq!(totals["Soda"], 3);
}

#[test]
fn meal_selection_is_clamped_to_category_cap() {
    let menu = menu();
    let mut order = Order::new();
    order.set_meal_count("Lunch", 1);
    order
        .assign_meal_item(&menu, "Lunch", 0, ComboCategory::Food, "Burger", 1)
        .unwrap();

    let outcome = order
        .assign_meal_item(&menu, "Lunch", 0, ComboCategory::Food, "fries", 3)
        .unwrap();

    assert!(outcome.clamped);
    assert_eq!(outcome.applied, 1);
    let meal = &order.combos()["Lunch"].meals()[0];
    assert_eq!(meal.quantity(ComboCategory::Food, "Fries"), 1);
    assert_eq!(meal.total(ComboCategory::Food), 2);
    assert_eq!(validate(&order, &menu), Ok(()));
    assert_eq!(price(&order, &menu), Money::whole(9));
}

#[test]
fn overfilled_meal_is_reported() {
    let menu = menu();
    let mut meal = menu_engine::MealSelection::new();
    meal.set(ComboCategory::Food, "Fries", 3);
    let mut order = Order::new();
    order.set_combo("Lunch", ComboOrder::MixAndMatch { meals: vec![meal] });

    let violation = validate(&order, &menu).unwrap_err();

    assert!(matches!(
        violation,
        LimitViolation::ComboCategoryLimitExceeded {
            meal_index: 0,
            quantity: 3,
            limit: 2,
            ..
        }
    ));
}

#[test]
fn meal_item_over_item_limit_is_reported_with_its_meal() {
    let mut menu = menu();
    menu.set_item_limit("BuRger", 1).unwrap();
    let mut order = Order::new();
    order.set_meal_count("Lunch", 2);
    order
        .assign_meal_item(&menu, "Lunch", 1, ComboCategory::Food, "burger", 2)
        .unwrap();

    let violation = validate(&order, &menu).unwrap_err();

    assert!(matches!(
        violation,
        LimitViolation::ComboItemLimitExceeded {
            meal_index: Some(1),
            quantity: 2,
            limit: 1,
            ..
        }
    ));
}

#[test]
fn item_limit_is_enforced() {
    let mut menu = menu();
    menu.set_item_limit("Bone", 1).unwrap();
    let mut order = hundred_order(&menu);
    assert_eq!(validate(&order, &menu), Ok(()));

    order.add_item(&menu, "Bone", 2);
    let violation = validate(&order, &menu).unwrap_err();
    assert_eq!(violation.to_string(), "Limit exceeded for Bone: max 1");
}

// =============================================================================
// Discounts
// =============================================================================

#[test]
fn discount_bypass_keeps_item_at_full_price() {
    let menu = menu();
    let mut order = hundred_order(&menu);
    assert_eq!(price(&order, &menu), Money::whole(100));

    order.toggle_discount("Half", true);
    assert_eq!(price(&order, &menu), Money::whole(60));
}

#[test]
fn custom_discount_applies_after_named_discounts() {
    let menu = menu();
    let mut order = hundred_order(&menu);
    order.toggle_discount("Half", true);
    order.set_custom_discount(Some(dec!(10)));

    let total = price(&order, &menu);

    assert_eq!(total, Money::whole(54));
    assert_eq!(total.to_string(), "$54.00");
}

#[test]
fn later_discounts_use_original_line_costs() {
    let menu = menu();
    let mut order = hundred_order(&menu);
    order.toggle_discount("Half", true);
    order.toggle_discount("Tenth", true);

    // 100 - 80*0.5 = 60, then 60 - 100*0.1 = 50.
    assert_eq!(price(&order, &menu), Money::whole(50));
}

#[test]
fn unknown_discount_is_ignored() {
    let menu = menu();
    let mut order = hundred_order(&menu);
    order.toggle_discount("Gone", true);
    assert_eq!(price(&order, &menu), Money::whole(100));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_order() -> impl Strategy<Value = (u32, u32, u32, bool, bool, Option<i64>)> {
    (
        0u32..20,
        0u32..20,
        0u32..5,
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(-50i64..200),
    )
}

fn build_order(
    menu: &MenuDocument,
    (burgers, bones, classics, half, tenth, custom): (u32, u32, u32, bool, bool, Option<i64>),
) -> Order {
    let mut order = Order::new();
    order.add_item(menu, "Burger", burgers);
    order.add_item(menu, "Bone", bones);
    order.set_fixed_combo("Classic", classics);
    order.toggle_discount("Half", half);
    order.toggle_discount("Tenth", tenth);
    order.set_custom_discount(custom.map(Decimal::from));
    order
}

proptest! {
    #[test]
    fn pricing_is_idempotent(input in arb_order()) {
        let menu = menu();
        let order = build_order(&menu, input);
        let snapshot = order.clone();

        let first = price(&order, &menu);
        let second = price(&order, &menu);

        prop_assert_eq!(first, second);
        prop_assert_eq!(order, snapshot);
    }

    #[test]
    fn total_is_never_negative(input in arb_order()) {
        let menu = menu();
        let order = build_order(&menu, input);
        prop_assert!(!price(&order, &menu).is_negative());
    }

    #[test]
    fn total_never_exceeds_subtotal(input in arb_order()) {
        let menu = menu();
        let order = build_order(&menu, input);
        let mut undiscounted = order.clone();
        undiscounted.toggle_discount("Half", false);
        undiscounted.toggle_discount("Tenth", false);
        undiscounted.set_custom_discount(None);

        prop_assert!(price(&order, &menu) <= price(&undiscounted, &menu));
    }
}
