//! Durable user directory.

use crate::error::{AuthError, Result};
use crate::hash::credential_digest;
use crate::user::{Role, UserRecord};
use parking_lot::RwLock;
use std::sync::Arc;
use stockade_storage::{KeyValueStore, StorageError};

/// Durable-storage key holding the serialized account collection.
pub const USERS_KEY: &str = "stockade.users";

/// Repository over the durable collection of registered accounts.
///
/// The collection is persisted as one JSON array and rewritten wholesale on
/// every insertion. It is loaded lazily on first access and cached for the
/// rest of the process.
pub struct UserDirectory {
    store: Arc<dyn KeyValueStore>,
    cache: RwLock<Option<Vec<UserRecord>>>,
}

impl UserDirectory {
    /// Creates a directory over the given durable storage handle.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
        }
    }

    /// Returns every registered account.
    ///
    /// Malformed or unreadable persisted data degrades to an empty
    /// collection with a logged warning; this never errors.
    pub fn load_all(&self) -> Vec<UserRecord> {
        if let Some(records) = self.cache.read().as_ref() {
            return records.clone();
        }

        let records = self.read_from_store();
        *self.cache.write() = Some(records.clone());
        records
    }

    /// Serializes and overwrites the persisted collection wholesale.
    ///
    /// There is no cross-process coordination: the later of two concurrent
    /// writers wins and the earlier write is silently discarded.
    pub fn save_all(&self, records: &[UserRecord]) -> Result<()> {
        let json = serde_json::to_string(records).map_err(StorageError::from)?;
        self.store.set(USERS_KEY, &json)?;
        *self.cache.write() = Some(records.to_vec());
        Ok(())
    }

    /// Looks up an account by username, ignoring case.
    pub fn find_by_username(&self, name: &str) -> Option<UserRecord> {
        let wanted = name.to_lowercase();
        self.load_all()
            .into_iter()
            .find(|record| record.username.to_lowercase() == wanted)
    }

    /// Registers a new account.
    ///
    /// The username is trimmed before use. Fails with
    /// [`AuthError::InvalidInput`] when the username or password is empty and
    /// with [`AuthError::DuplicateUser`] when an account with the same
    /// username (ignoring case) already exists.
    pub fn create(&self, username: &str, password: &str, role: Role) -> Result<UserRecord> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::InvalidInput("username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidInput("password cannot be empty".into()));
        }
        if self.find_by_username(username).is_some() {
            return Err(AuthError::DuplicateUser(username.to_string()));
        }

        let record = UserRecord::new(username.to_string(), credential_digest(password), role);

        let mut records = self.load_all();
        records.push(record.clone());
        self.save_all(&records)?;

        Ok(record)
    }

    /// Returns the number of registered accounts.
    pub fn count(&self) -> usize {
        self.load_all().len()
    }

    /// Returns true if no accounts are registered.
    pub fn is_empty(&self) -> bool {
        self.load_all().is_empty()
    }

    fn read_from_store(&self) -> Vec<UserRecord> {
        match self.store.get(USERS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(records) => records,
                Err(err) => {
                    tracing::warn!(error = %err, "account collection is malformed, treating as empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "account collection could not be read, treating as empty");
                Vec::new()
            }
        }
    }
}
