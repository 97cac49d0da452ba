//! Order summary math.

use crate::product::Product;

/// Totals shown in the order summary block.
///
/// A pure function of the cart snapshot and the applied discount; cheap
/// enough to recompute on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl OrderSummary {
    /// Compute subtotal and total for a cart and a flat discount.
    ///
    /// The total never goes negative, even when the discount exceeds the
    /// subtotal. A negative discount is treated as no discount.
    #[must_use]
    pub fn compute(items: &[Product], discount_cents: i64) -> Self {
        let discount_cents = discount_cents.max(0);
        let subtotal_cents: i64 = items.iter().map(Product::line_total_cents).sum();
        Self {
            subtotal_cents,
            discount_cents,
            total_cents: (subtotal_cents - discount_cents).max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OrderSummary;
    use crate::product::Product;

    fn item(id: &str, price_cents: i64, stock_level: i64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            image: String::new(),
            price_cents,
            stock_level,
            description: None,
            category: None,
            discount_percentage: 0.0,
            is_featured: false,
        }
    }

    #[test]
    fn empty_cart_sums_to_zero() {
        let summary = OrderSummary::compute(&[], 0);
        assert_eq!(summary.subtotal_cents, 0);
        assert_eq!(summary.total_cents, 0);
    }

    #[test]
    fn single_line_cart_matches_line_extension() {
        let summary = OrderSummary::compute(&[item("a", 1000, 2)], 0);
        assert_eq!(summary.subtotal_cents, 2000);
        assert_eq!(summary.total_cents, 2000);
    }

    #[test]
    fn discount_subtracts_from_subtotal() {
        let cart = [item("a", 1000, 2), item("b", 500, 1)];
        let summary = OrderSummary::compute(&cart, 500);
        assert_eq!(summary.subtotal_cents, 2500);
        assert_eq!(summary.total_cents, 2000);
    }

    #[test]
    fn total_floors_at_zero_when_discount_exceeds_subtotal() {
        let summary = OrderSummary::compute(&[item("a", 300, 1)], 10_000);
        assert_eq!(summary.subtotal_cents, 300);
        assert_eq!(summary.total_cents, 0);
    }

    #[test]
    fn negative_discount_is_ignored() {
        let summary = OrderSummary::compute(&[item("a", 300, 1)], -200);
        assert_eq!(summary.discount_cents, 0);
        assert_eq!(summary.total_cents, 300);
    }
}
