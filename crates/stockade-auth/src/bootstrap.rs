//! First-run seeding of the default account.

use crate::directory::UserDirectory;
use crate::user::Role;

/// Username of the seeded default account.
pub const DEFAULT_USERNAME: &str = "admin";

/// Password of the seeded default account.
///
/// Demo placeholder; replace before any real deployment.
pub const DEFAULT_PASSWORD: &str = "admin123";

/// Seeds one default admin account when the directory is empty.
///
/// Idempotent: once any account exists this is a no-op. A failed write is
/// logged and swallowed — the application stays usable without a default
/// account.
pub fn ensure_default_account(directory: &UserDirectory) {
    if !directory.is_empty() {
        return;
    }

    match directory.create(DEFAULT_USERNAME, DEFAULT_PASSWORD, Role::Admin) {
        Ok(_) => tracing::info!(username = DEFAULT_USERNAME, "seeded default account"),
        Err(err) => tracing::warn!(error = %err, "could not seed default account"),
    }
}
