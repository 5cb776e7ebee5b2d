//! Persistent key-value storage and the typed session context built on top of it.
//!
//! The store holds two things: the session token (`authToken`) and the one-shot
//! pending credentials (`tempEmail`/`tempPassword`) that carry a fresh sign-up over
//! to the sign-in form. Nothing else is persisted. Access is not coordinated
//! across processes; the last writer wins.

mod file;
mod memory;
mod session;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
pub use self::session::{PendingCredentials, Session};

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt storage file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key-value storage with local-storage semantics.
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
