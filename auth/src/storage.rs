//! Persistent bearer-token storage seam.
//!
//! The token is the only thing persisted across restarts. Browser builds back
//! this with `localStorage`, the CLI with a file, and tests with
//! [`MemoryTokenStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageError;

/// Fixed key the token is stored under.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Key-value slot holding the bearer token.
pub trait TokenStore {
    /// Read the stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write fails.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Removing an absent token succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the delete fails.
    fn clear(&self) -> Result<(), StorageError>;
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// In-process token slot. Lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if left behind by a previous run.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_owned())),
        }
    }

    /// Current token without going through the `Result` API.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}
