//! Key/value storage for Stockade.
//!
//! This crate provides the storage handles the authentication layer is
//! constructed with. Two scopes exist:
//!
//! - **Durable** storage outlives any single run and is shared by every
//!   context over the same backing store ([`FileStore`]).
//! - **Volatile** storage lives and dies with one context ([`MemoryStore`]).
//!
//! Both scopes expose the same [`KeyValueStore`] trait, so callers never
//! depend on a concrete backend and tests can substitute their own.

mod error;
mod file;
mod memory;
mod traits;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
