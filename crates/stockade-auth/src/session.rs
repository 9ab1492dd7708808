//! Session lifecycle and remember-me rehydration.

use crate::directory::UserDirectory;
use crate::error::Result;
use crate::user::{Role, UserRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use stockade_storage::{KeyValueStore, StorageError};

/// Volatile-storage key holding the current session record.
pub const SESSION_KEY: &str = "stockade.session";

/// Durable-storage key holding the remembered username.
pub const REMEMBER_KEY: &str = "stockade.remember";

/// The current authenticated identity in this context.
///
/// At most one record exists at a time in volatile storage; absence means
/// "unauthenticated."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Id of the account this session belongs to.
    pub id: String,
    /// Username of the account.
    pub username: String,
    /// Role of the account.
    pub role: Role,
    /// Unix timestamp (seconds) when the session was established.
    pub created_at: u64,
}

impl SessionRecord {
    fn for_user(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            created_at: epoch_secs(),
        }
    }
}

/// Manages the volatile session record and the durable remember pointer.
///
/// The remember pointer holds a username only, never a credential, and is
/// advisory: it is re-validated against the directory before it ever becomes
/// a session.
pub struct SessionStore {
    volatile: Arc<dyn KeyValueStore>,
    durable: Arc<dyn KeyValueStore>,
    directory: Arc<UserDirectory>,
}

impl SessionStore {
    /// Creates a session store over the given storage handles.
    pub fn new(
        volatile: Arc<dyn KeyValueStore>,
        durable: Arc<dyn KeyValueStore>,
        directory: Arc<UserDirectory>,
    ) -> Self {
        Self {
            volatile,
            durable,
            directory,
        }
    }

    /// Establishes a session for `user`.
    ///
    /// With `remember`, the username is written to the durable remember
    /// pointer; without it, any existing pointer is cleared.
    pub fn set_session(&self, user: &UserRecord, remember: bool) -> Result<SessionRecord> {
        let record = SessionRecord::for_user(user);
        let json = serde_json::to_string(&record).map_err(StorageError::from)?;
        self.volatile.set(SESSION_KEY, &json)?;

        if remember {
            self.durable.set(REMEMBER_KEY, &user.username)?;
        } else {
            self.durable.remove(REMEMBER_KEY)?;
        }

        Ok(record)
    }

    /// Removes the volatile session record.
    ///
    /// The remember pointer is untouched: clearing the session alone does not
    /// forget the remembered identity.
    pub fn clear_session(&self) -> Result<()> {
        self.volatile.remove(SESSION_KEY)?;
        Ok(())
    }

    /// Removes the durable remember pointer.
    pub fn forget(&self) -> Result<()> {
        self.durable.remove(REMEMBER_KEY)?;
        Ok(())
    }

    /// Returns the current session, rehydrating from the remember pointer if
    /// necessary.
    ///
    /// When no volatile record exists but a remembered username resolves to a
    /// registered account, a fresh record is written and returned — the one
    /// implicit state transition in the system. A remembered username that no
    /// longer resolves yields `None` and leaves the pointer in place.
    pub fn get_session(&self) -> Option<SessionRecord> {
        if let Some(record) = self.current() {
            return Some(record);
        }
        self.rehydrate()
    }

    /// Returns true when a session exists or can be rehydrated.
    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }

    /// Returns the remembered username, if one is stored.
    pub fn remembered_username(&self) -> Option<String> {
        match self.durable.get(REMEMBER_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "remember pointer could not be read");
                None
            }
        }
    }

    fn current(&self) -> Option<SessionRecord> {
        match self.volatile.get(SESSION_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(error = %err, "session record is malformed, treating as absent");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "session record could not be read");
                None
            }
        }
    }

    fn rehydrate(&self) -> Option<SessionRecord> {
        let username = self.remembered_username()?;
        let user = self.directory.find_by_username(&username)?;

        let record = SessionRecord::for_user(&user);
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(err) = self.volatile.set(SESSION_KEY, &json) {
                    tracing::warn!(error = %err, "rehydrated session could not be persisted");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "rehydrated session could not be serialized");
            }
        }

        Some(record)
    }
}

/// Current Unix epoch in seconds.
fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
