//! Checkout Use Case

use tracing::{info, warn};

use crate::application::dto::{OrderSummaryDto, ReceiptDto};
use crate::domain::limits::{LimitValidator, LimitViolation};
use crate::domain::menu::MenuDocument;
use crate::domain::order::Order;
use crate::domain::pricing::OrderPricingService;

/// Use case for summarising and confirming orders against one menu.
pub struct CheckoutUseCase<'a> {
    menu: &'a MenuDocument,
}

impl<'a> CheckoutUseCase<'a> {
    /// Create a checkout for a menu.
    #[must_use]
    pub const fn new(menu: &'a MenuDocument) -> Self {
        Self { menu }
    }

    /// Live summary of the order.
    #[must_use]
    pub fn summary(&self, order: &Order) -> OrderSummaryDto {
        OrderSummaryDto::build(order, self.menu)
    }

    /// Confirm the purchase.
    ///
    /// Validates, prices, builds the receipt and clears the order for the
    /// next customer.
    ///
    /// # Errors
    ///
    /// Returns the first violated limit; the order is left untouched.
    pub fn confirm(&self, order: &mut Order) -> Result<ReceiptDto, LimitViolation> {
        if let Err(violation) = LimitValidator::new(self.menu).validate(order) {
            warn!(code = violation.code(), %violation, "Checkout rejected");
            return Err(violation);
        }
        let total = OrderPricingService::new(self.menu).price(order);
        let receipt = ReceiptDto::new(order, total);
        info!(
            lines = receipt.lines.len(),
            discounts = receipt.discounts.len(),
            total = %total,
            "Purchase confirmed"
        );
        order.clear();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;

    fn menu() -> MenuDocument {
        let mut doc = MenuDocument::starter();
        doc.add_item("food", None, "Burger").unwrap();
        doc.set_item_limit("Burger", 2).unwrap();
        doc
    }

    #[test]
    fn confirm_returns_receipt_and_clears_order() {
        let menu = menu();
        let checkout = CheckoutUseCase::new(&menu);
        let mut order = Order::new();
        order.add_item(&menu, "Burger", 2);

        let receipt = checkout.confirm(&mut order).unwrap();

        assert_eq!(receipt.total, Money::whole(20));
        assert_eq!(receipt.lines, vec!["Burger: x2"]);
        assert!(order.is_empty());
    }

    #[test]
    fn rejected_checkout_keeps_order() {
        let menu = menu();
        let checkout = CheckoutUseCase::new(&menu);
        let mut order = Order::new();
        order.add_item(&menu, "Burger", 3);
        let before = order.clone();

        let violation = checkout.confirm(&mut order).unwrap_err();

        assert_eq!(violation.to_string(), "Limit exceeded for Burger: max 2");
        assert_eq!(order, before);
        assert_eq!(checkout.summary(&order).violations.len(), 1);
    }
}
