//! Resolve product image references to displayable URLs.
//!
//! Cart snapshots carry an opaque image reference per line item. Absolute
//! URLs pass through untouched; bare references are anchored under the
//! deployment's product-image path, honoring `PUBLIC_URL` when the site is
//! hosted below a subdirectory.

/// Map an item's image reference to a usable URL string.
#[must_use]
pub fn image_url(reference: &str) -> String {
    image_url_with_base(reference, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn image_url_with_base(reference: &str, base: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = reference.trim_start_matches('/');
    if base.is_empty() {
        format!("/images/products/{rel}")
    } else {
        format!("{base}/images/products/{rel}")
    }
}
