//! In-memory snapshot adapter.

use std::cell::RefCell;

use crate::roster::student::Student;
use crate::storage::{SnapshotStore, StorageError};

/// Snapshot store backed by process memory.
///
/// Drop-in fake for tests and for embedding the roster store without
/// durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Option<Vec<Student>>>,
}

impl MemoryStore {
    /// Store with no snapshot, as on first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding an existing snapshot, as a previous session would
    /// leave it.
    pub fn with_snapshot(roster: Vec<Student>) -> Self {
        Self {
            snapshot: RefCell::new(Some(roster)),
        }
    }

    /// The last saved roster, if any.
    pub fn snapshot(&self) -> Option<Vec<Student>> {
        self.snapshot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<Vec<Student>> {
        self.snapshot.borrow().clone()
    }

    fn save(&self, roster: &[Student]) -> Result<(), StorageError> {
        *self.snapshot.borrow_mut() = Some(roster.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        let roster = vec![Student {
            id: 1,
            name: "Nguyễn Văn A".to_string(),
            class: "CNTT1".to_string(),
            age: 20,
        }];
        store.save(&roster).unwrap();

        assert_eq!(store.load(), Some(roster.clone()));
        assert_eq!(store.snapshot(), Some(roster));
    }
}
