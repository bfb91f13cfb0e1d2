//! Snapshot persistence port and adapters.
//!
//! The roster store depends on [`SnapshotStore`] only; swapping the
//! backing medium (file, database, in-memory fake) never touches roster
//! logic.

pub mod json_file;
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::roster::student::Student;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Adapter-level persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to write snapshot: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence port for the roster snapshot.
///
/// `load` is deliberately infallible: an absent or unusable snapshot is
/// reported as `None`, and the caller falls back to seed data. `save`
/// reports failures so callers can decide how much they care; the roster
/// store logs and carries on.
pub trait SnapshotStore {
    /// Read the persisted roster, if any usable snapshot exists.
    fn load(&self) -> Option<Vec<Student>>;

    /// Write the roster as the new snapshot, replacing any previous one.
    fn save(&self, roster: &[Student]) -> Result<(), StorageError>;
}
