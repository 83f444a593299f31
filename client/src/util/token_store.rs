//! Session token persistence in `window.localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads so the page can restore the session silently.
//! Native builds have no browser storage: reads see nothing, writes fail.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use session::{StoreError, TokenStore};

#[cfg(feature = "csr")]
use session::config::TOKEN_KEY;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(feature = "csr")]
fn io(e: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Io(format!("{e:?}"))
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(TOKEN_KEY).map_err(io)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?.set_item(TOKEN_KEY, token).map_err(io)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StoreError::Unavailable("no browser storage".to_owned()))
        }
    }

    fn delete(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?.remove_item(TOKEN_KEY).map_err(io)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
