//! Durable storage for the single session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only shared mutable resource of a session. It is read at
//! start-up and before every authenticated call, written by a successful
//! sign-in, and deleted by sign-out or a disconnect.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StoreError;

/// Key/value capability holding the `access_token` entry.
pub trait TokenStore {
    /// Current token, if one is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn delete(&self) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }

    /// Peek at the slot without going through the trait.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn delete(&self) -> Result<(), StoreError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
