//! # Browser `localStorage` store — web persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. Keys are written to `window.localStorage` unchanged, so
//! accounts created by earlier versions of the page load as-is.
//!
//! ## Error handling
//!
//! Reads swallow every failure (no window, storage disabled by privacy
//! settings, ...) and return `None`. Writes report failures as
//! [`StoreError::Browser`] so the caller can tell the user the account was not
//! saved.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`; the storage handle is looked up on every call.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Browser("no window".to_string()))?;
        window
            .local_storage()
            .map_err(describe)?
            .ok_or_else(|| StoreError::Browser("localStorage unavailable".to_string()))
    }
}

fn describe(value: JsValue) -> StoreError {
    StoreError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, &value).map_err(describe)
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(describe)
    }
}
