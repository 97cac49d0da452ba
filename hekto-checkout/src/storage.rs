//! Key/value storage capability and the cart/discount accessors over it.
//!
//! The storefront persists the cart and the applied discount in client-side
//! key/value storage shared across pages. The checkout depends on this small
//! trait rather than on any concrete storage mechanism; the web crate backs
//! it with browser `localStorage`, tests use [`MemoryStore`].

use std::collections::BTreeMap;

use thiserror::Error;

use crate::money::dollars_to_cents;
use crate::product::Product;

/// Storage key the cart page writes its line-item snapshot under.
pub const CART_KEY: &str = "cart";
/// Storage key the promotion step writes the applied discount under.
pub const DISCOUNT_KEY: &str = "appliedDiscount";

/// Minimal key/value capability the checkout needs from its host.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and native tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Failure to decode a persisted cart snapshot.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a cart snapshot from its JSON form.
///
/// # Errors
/// Returns [`CartError::Malformed`] when the snapshot is not a JSON array of
/// line items.
pub fn parse_cart(json: &str) -> Result<Vec<Product>, CartError> {
    Ok(serde_json::from_str(json)?)
}

/// Read the cart snapshot. An absent key is an empty cart; a snapshot that
/// fails to decode is logged and treated as empty rather than surfaced.
#[must_use]
pub fn load_cart(store: &impl KeyValueStore) -> Vec<Product> {
    let Some(json) = store.get(CART_KEY) else {
        return Vec::new();
    };
    match parse_cart(&json) {
        Ok(items) => items,
        Err(err) => {
            log::warn!("ignoring unreadable cart snapshot: {err}");
            Vec::new()
        }
    }
}

/// Remove the persisted cart snapshot.
pub fn clear_cart(store: &mut impl KeyValueStore) {
    store.remove(CART_KEY);
}

/// Read the applied discount in cents. The promotion step stores a dollar
/// number string; absent, unparsable, or negative values read as zero.
#[must_use]
pub fn load_discount(store: &impl KeyValueStore) -> i64 {
    let Some(raw) = store.get(DISCOUNT_KEY) else {
        return 0;
    };
    match raw.trim().parse::<f64>() {
        Ok(dollars) => dollars_to_cents(dollars).max(0),
        Err(_) => {
            log::warn!("ignoring unparsable discount value {raw:?}");
            0
        }
    }
}

/// Remove the persisted discount.
pub fn clear_discount(store: &mut impl KeyValueStore) {
    store.remove(DISCOUNT_KEY);
}
