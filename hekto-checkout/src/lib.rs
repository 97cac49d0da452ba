//! Hekto Checkout
//!
//! Platform-agnostic checkout logic for the Hekto storefront.
//! This crate provides the order summary math, billing form validation, and
//! the order submission state machine without any UI or browser dependencies.

pub mod billing;
pub mod flow;
pub mod money;
pub mod product;
pub mod storage;
pub mod summary;

// Re-export commonly used types
pub use billing::{BillingField, BillingForm};
pub use flow::{CheckoutFlow, SubmitOutcome, SubmitState};
pub use money::{dollars_to_cents, format_cents};
pub use product::Product;
pub use storage::{
    CART_KEY, CartError, DISCOUNT_KEY, KeyValueStore, MemoryStore, clear_cart, clear_discount,
    load_cart, load_discount,
};
pub use summary::OrderSummary;
