//! Cart line items as persisted by the storefront's cart page.

use serde::{Deserialize, Serialize};

/// A single cart line item.
///
/// The storefront writes these as a JSON array under the shared cart key.
/// Optional fields are defaulted so snapshots written by older pages still
/// decode. The upstream cart reuses `stock_level` as the line quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Opaque asset reference resolved to a URL by the UI layer.
    #[serde(default)]
    pub image: String,
    /// Unit price in cents to avoid floating-point issues.
    pub price_cents: i64,
    /// Quantity of this line (storefront convention).
    pub stock_level: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Carried through the snapshot for other pages; checkout ignores it.
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    /// Extended price of this line in cents.
    ///
    /// Negative prices or quantities never occur in well-formed snapshots;
    /// they clamp to zero rather than producing a negative extension.
    #[must_use]
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents.max(0) * self.stock_level.max(0)
    }
}
