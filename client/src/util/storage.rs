//! `localStorage`-backed token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds persist the bearer token under the fixed `auth_token` key
//! so a reload can restore the session. Native builds have no storage: reads
//! see nothing and writes fail with [`StorageError::Unavailable`].

use auth::{StorageError, TokenStore};
#[cfg(feature = "csr")]
use auth::TOKEN_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StorageError::Io(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|e| StorageError::Io(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StorageError::Io(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
