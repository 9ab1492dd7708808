//! Authentication and sessions for Stockade.
//!
//! This crate provides:
//! - **Credential hashing**: deterministic SHA-256 digests of passwords
//! - **User directory**: durable accounts keyed by case-insensitive username
//! - **Bootstrap**: first-run seeding of a default admin account
//! - **Authenticator**: lookup + digest comparison producing a pass/fail verdict
//! - **Session store**: the per-context "logged in" record and the durable
//!   "remember me" pointer, including transparent rehydration
//! - **Session facade**: the one surface application pages depend on
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use stockade_auth::{Role, SessionFacade};
//! use stockade_storage::MemoryStore;
//!
//! let durable = Arc::new(MemoryStore::new());
//! let volatile = Arc::new(MemoryStore::new());
//! let auth = SessionFacade::new(durable, volatile);
//!
//! // First run: seed the demo admin account
//! auth.ensure_default_account();
//!
//! let outcome = auth.login("admin", "admin123", false).unwrap();
//! assert!(outcome.is_success());
//! assert!(auth.is_authenticated());
//!
//! auth.logout(false).unwrap();
//! ```

mod authenticator;
mod bootstrap;
mod directory;
mod error;
mod facade;
mod hash;
mod session;
mod user;

pub use authenticator::{AuthFailure, AuthOutcome, Authenticator};
pub use bootstrap::{ensure_default_account, DEFAULT_PASSWORD, DEFAULT_USERNAME};
pub use directory::{UserDirectory, USERS_KEY};
pub use error::{AuthError, Result};
pub use facade::SessionFacade;
pub use hash::{credential_digest, digest_matches, DIGEST_HEX_LEN};
pub use session::{SessionRecord, SessionStore, REMEMBER_KEY, SESSION_KEY};
pub use user::{Role, UserRecord};
