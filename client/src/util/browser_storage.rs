//! `localStorage` backend for lobby session records.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` is a stateless handle: each call looks up
//! `window.localStorage` afresh, so the type stays `Send + Sync` and can live
//! inside a reactive signal. Outside `hydrate` builds reads find nothing and
//! writes fail with `StoreError::Unavailable`.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use lobby::store::{KeyValue, StoreError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValue for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| unavailable(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| unavailable(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable("local storage requires a browser".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| unavailable(&e))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_owned()))
}

#[cfg(feature = "hydrate")]
fn unavailable(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
