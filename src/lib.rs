//! Rosterly - Student Roster Management Core
//!
//! Rosterly owns a small roster of student records and the rules for
//! mutating and deriving from it:
//! - add / update / remove with store-assigned ids and presence validation
//! - search by name substring, filter by class, distinct-class listing
//! - snapshot persistence behind a pluggable port
//!
//! # Architecture
//!
//! [`RosterStore`] is the single source of truth; no other component holds
//! an independent mutable copy of the roster. A front end (the bundled CLI,
//! or any embedding) forwards user intents into the store and re-reads the
//! current state afterwards. Durability is best-effort through the
//! [`SnapshotStore`] port.

pub mod cli;
pub mod error;
pub mod roster;
pub mod storage;

pub use error::{Result, RosterError};
pub use roster::{Criteria, RosterStore, Student, StudentDraft};
pub use storage::{JsonFileStore, MemoryStore, SnapshotStore};
