//! # Session store
//!
//! [`SessionStore`] keeps the signed-in [`User`] in a [`LocalStorage`] under the
//! [`USER_KEY`] key so a reload or restart resumes the session.
//!
//! Restoring never fails: an unreadable backend or a record that does not
//! validate as a [`User`] is reported as "no session". A malformed record is
//! also removed so the next start does not trip over it again.

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::models::User;
use crate::storage::LocalStorage;

/// Storage key holding the serialized user.
pub const USER_KEY: &str = "user";

/// Persists the authenticated user in local durable storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: LocalStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the cached user, or `None` when absent or unusable.
    pub fn restore(&self) -> Option<User> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No cached session");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read cached session");
                return None;
            }
        };

        match User::from_json(&raw) {
            Ok(user) => {
                debug!(user = %user.identifier(), "Restored cached session");
                Some(user)
            }
            Err(e) => {
                warn!(error = %e, "Discarding malformed cached session");
                if let Err(e) = self.storage.remove_item(USER_KEY) {
                    warn!(error = %e, "Failed to remove malformed cached session");
                }
                None
            }
        }
    }

    /// Write `user`, replacing any previous record.
    pub fn persist(&self, user: &User) -> Result<(), StorageError> {
        let json = user.to_json()?;
        self.storage.set_item(USER_KEY, &json)?;
        debug!(user = %user.identifier(), "Persisted session");
        Ok(())
    }

    /// Remove the cached user.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(USER_KEY)?;
        debug!("Cleared cached session");
        Ok(())
    }
}
