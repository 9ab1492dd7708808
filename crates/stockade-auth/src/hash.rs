//! Credential hashing using SHA-256.

use sha2::{Digest, Sha256};

/// The length of a credential digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Computes the one-way digest of a plaintext credential.
///
/// Deterministic within a process and across processes: the same plaintext
/// always yields the same 64-character lowercase hex digest. No per-call salt
/// is applied, so a freshly computed digest is directly comparable to a
/// stored one.
#[must_use]
pub fn credential_digest(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks a plaintext credential against a stored digest.
#[must_use]
pub fn digest_matches(plaintext: &str, stored: &str) -> bool {
    constant_time_eq(credential_digest(plaintext).as_bytes(), stored.as_bytes())
}

/// Constant-time byte comparison to prevent timing side-channels.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: digests are always 64 lowercase hex characters.
        #[test]
        fn prop_digest_format(plaintext in ".*") {
            let digest = credential_digest(&plaintext);
            prop_assert_eq!(digest.len(), DIGEST_HEX_LEN);
            prop_assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }

        /// Property: repeated calls yield identical digests.
        #[test]
        fn prop_digest_deterministic(plaintext in ".*") {
            prop_assert_eq!(credential_digest(&plaintext), credential_digest(&plaintext));
        }

        /// Property: a digest always matches its own plaintext.
        #[test]
        fn prop_digest_matches_self(plaintext in ".*") {
            let stored = credential_digest(&plaintext);
            prop_assert!(digest_matches(&plaintext, &stored));
        }

        /// Property: distinct plaintexts yield distinct digests.
        #[test]
        fn prop_digest_distinct(a in "[a-z]{1,20}", b in "[A-Z]{1,20}") {
            prop_assert_ne!(credential_digest(&a), credential_digest(&b));
        }
    }
}
