//! Browser-backed key/value store for the checkout's cart and discount keys.

use hekto_checkout::KeyValueStore;

/// `KeyValueStore` over browser `localStorage`.
///
/// Storage being unavailable (private browsing, disabled, non-browser host)
/// is not fatal: reads yield `None` and writes are dropped, so the page
/// degrades to an empty cart and a zero discount.
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = match crate::dom::local_storage() {
                Ok(storage) => Some(storage),
                Err(_) => {
                    log::warn!("localStorage unavailable; cart and discount default to empty");
                    None
                }
            };
            Self { storage }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { storage: None }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.remove_item(key);
        }
    }
}
