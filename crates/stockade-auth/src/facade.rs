//! The single API surface consumed by application pages.

use crate::authenticator::{AuthOutcome, Authenticator};
use crate::bootstrap;
use crate::directory::UserDirectory;
use crate::error::Result;
use crate::session::{SessionRecord, SessionStore};
use crate::user::{Role, UserRecord};
use std::sync::Arc;
use stockade_storage::KeyValueStore;

/// Aggregates the directory, authenticator, and session store behind one
/// stable surface.
///
/// Pages depend on this type only; internal storage mechanics can change
/// underneath it without touching callers.
pub struct SessionFacade {
    directory: Arc<UserDirectory>,
    authenticator: Authenticator,
    sessions: SessionStore,
}

impl SessionFacade {
    /// Builds the facade over injected durable and volatile storage handles.
    pub fn new(durable: Arc<dyn KeyValueStore>, volatile: Arc<dyn KeyValueStore>) -> Self {
        let directory = Arc::new(UserDirectory::new(durable.clone()));
        let authenticator = Authenticator::new(directory.clone());
        let sessions = SessionStore::new(volatile, durable, directory.clone());

        Self {
            directory,
            authenticator,
            sessions,
        }
    }

    /// Verifies credentials and, on success, establishes the session.
    ///
    /// With `remember`, the username is durably remembered so a later
    /// context can rehydrate without re-entering credentials.
    pub fn login(&self, username: &str, password: &str, remember: bool) -> Result<AuthOutcome> {
        let outcome = self.authenticator.authenticate(username, password);
        if let AuthOutcome::Success { user } = &outcome {
            self.sessions.set_session(user, remember)?;
        }
        Ok(outcome)
    }

    /// Ends the current session.
    ///
    /// Without `forget`, the remembered identity stays and the next
    /// [`get_session`](Self::get_session) call logs it straight back in.
    /// With `forget`, the remembered identity is dropped as well.
    pub fn logout(&self, forget: bool) -> Result<()> {
        self.sessions.clear_session()?;
        if forget {
            self.sessions.forget()?;
        }
        Ok(())
    }

    /// Returns true when a session exists or can be rehydrated.
    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }

    /// Returns the current session, rehydrating from the remembered
    /// identity if necessary.
    pub fn get_session(&self) -> Option<SessionRecord> {
        self.sessions.get_session()
    }

    /// Registers a new account.
    pub fn create_user(&self, username: &str, password: &str, role: Role) -> Result<UserRecord> {
        self.directory.create(username, password, role)
    }

    /// Seeds the default admin account when no accounts exist. Idempotent
    /// and infallible; failures are logged.
    pub fn ensure_default_account(&self) {
        bootstrap::ensure_default_account(&self.directory);
    }

    /// Looks up an account by username, ignoring case.
    pub fn find_user_by_username(&self, name: &str) -> Option<UserRecord> {
        self.directory.find_by_username(name)
    }

    /// Returns every registered account.
    pub fn list_users(&self) -> Vec<UserRecord> {
        self.directory.load_all()
    }
}
