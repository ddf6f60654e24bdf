//! Session — the single-slot holder of the current identity.
//!
//! `SessionStore` is an explicit handle passed to whoever needs it; persistence goes
//! through the `SessionStorage` port so the store can be exercised without a real
//! backend.

pub mod directory;
pub mod storage;
pub mod store;

use thiserror::Error;

pub use directory::IdentityDirectory;
pub use storage::{FileStorage, MemoryStorage, RedisStorage, SessionStorage};
pub use store::{SessionSettings, SessionSnapshot, SessionStore};

#[derive(Debug, Error)]
pub enum SessionError {
    /// No directory entry matches the (email, role) pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The persisted identity could not be decoded. Treated as logged out.
    #[error("Persisted session is corrupt: {0}")]
    StorageCorrupt(#[from] serde_json::Error),
}
