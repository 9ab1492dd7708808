//! Credential verification.

use crate::directory::UserDirectory;
use crate::hash::digest_matches;
use crate::user::UserRecord;
use std::sync::Arc;

/// Outcome of a credential check.
///
/// Failed checks are ordinary values rather than errors so callers can render
/// a message without any error plumbing.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// The credentials matched a registered account.
    Success {
        /// The matching account.
        user: UserRecord,
    },
    /// The credentials did not match.
    Failure {
        /// Why the check failed.
        reason: AuthFailure,
    },
}

impl AuthOutcome {
    /// Returns true for [`AuthOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the matched account, if any.
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::Success { user } => Some(user),
            Self::Failure { .. } => None,
        }
    }
}

/// Reason a credential check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No account matches the supplied username.
    UserNotFound,
    /// The password digest does not match the stored one.
    InvalidCredentials,
}

impl AuthFailure {
    /// Human-readable message suitable for a login form.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound => "no account with that username",
            Self::InvalidCredentials => "incorrect password",
        }
    }
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks supplied credentials against the user directory.
pub struct Authenticator {
    directory: Arc<UserDirectory>,
}

impl Authenticator {
    /// Creates an authenticator reading from the given directory.
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }

    /// Verifies a username/password pair.
    ///
    /// Looks the username up (ignoring case), hashes the supplied password,
    /// and compares it against the stored digest.
    pub fn authenticate(&self, username: &str, password: &str) -> AuthOutcome {
        let Some(user) = self.directory.find_by_username(username) else {
            return AuthOutcome::Failure {
                reason: AuthFailure::UserNotFound,
            };
        };

        if digest_matches(password, &user.password_hash) {
            AuthOutcome::Success { user }
        } else {
            AuthOutcome::Failure {
                reason: AuthFailure::InvalidCredentials,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;
    use stockade_storage::MemoryStore;

    fn test_authenticator() -> (Arc<UserDirectory>, Authenticator) {
        let directory = Arc::new(UserDirectory::new(Arc::new(MemoryStore::new())));
        let authenticator = Authenticator::new(directory.clone());
        (directory, authenticator)
    }

    #[test]
    fn authenticate_success_returns_record() {
        let (directory, authenticator) = test_authenticator();
        let created = directory.create("alice", "wonderland", Role::Admin).unwrap();

        let outcome = authenticator.authenticate("alice", "wonderland");
        assert!(outcome.is_success());
        assert_eq!(outcome.user(), Some(&created));
    }

    #[test]
    fn authenticate_is_case_insensitive_on_username() {
        let (directory, authenticator) = test_authenticator();
        directory.create("alice", "wonderland", Role::Admin).unwrap();

        assert!(authenticator.authenticate("ALICE", "wonderland").is_success());
    }

    #[test]
    fn authenticate_wrong_password() {
        let (directory, authenticator) = test_authenticator();
        directory.create("alice", "wonderland", Role::Admin).unwrap();

        let outcome = authenticator.authenticate("alice", "through the looking glass");
        assert_eq!(
            outcome,
            AuthOutcome::Failure {
                reason: AuthFailure::InvalidCredentials
            }
        );
        assert!(outcome.user().is_none());
    }

    #[test]
    fn authenticate_unknown_user() {
        let (_directory, authenticator) = test_authenticator();

        let outcome = authenticator.authenticate("ghost", "anything");
        assert_eq!(
            outcome,
            AuthOutcome::Failure {
                reason: AuthFailure::UserNotFound
            }
        );
    }

    #[test]
    fn failure_messages_are_stable() {
        assert_eq!(
            AuthFailure::UserNotFound.to_string(),
            "no account with that username"
        );
        assert_eq!(AuthFailure::InvalidCredentials.to_string(), "incorrect password");
    }
}
