//! The roster store.
//!
//! Owns the authoritative student list, enforces the roster invariants,
//! and writes a snapshot through the injected port after every committed
//! mutation. Persistence is best-effort: a failed write is logged and the
//! in-memory state stands.

use std::collections::HashSet;

use log::{info, warn};

use crate::error::{Result, RosterError};
use crate::roster::criteria::Criteria;
use crate::roster::seed::seed_roster;
use crate::roster::student::{Student, StudentDraft};
use crate::storage::SnapshotStore;

/// Single source of truth for the roster and its derived views.
pub struct RosterStore<S: SnapshotStore> {
    students: Vec<Student>,
    criteria: Criteria,
    snapshots: S,
}

impl<S: SnapshotStore> RosterStore<S> {
    /// Load the persisted roster if one exists and is well-formed,
    /// otherwise start from the seed set. Does not write anything.
    pub fn initialize(snapshots: S) -> Self {
        let students = match snapshots.load() {
            Some(records) if roster_is_well_formed(&records) => records,
            Some(_) => {
                warn!("persisted roster failed invariant checks, using seed data");
                seed_roster()
            }
            None => seed_roster(),
        };

        Self {
            students,
            criteria: Criteria::default(),
            snapshots,
        }
    }

    /// Current roster in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Current search/filter criteria.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// The injected snapshot port.
    pub fn snapshots(&self) -> &S {
        &self.snapshots
    }

    /// Look up a record by id.
    pub fn get(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Validate and append a new student, assigning the next free id.
    pub fn add(&mut self, draft: &StudentDraft) -> Result<Student> {
        let student = draft.commit(self.next_id())?;
        self.students.push(student.clone());
        info!("added student {} ({})", student.id, student.name);
        self.persist();
        Ok(student)
    }

    /// Replace an existing record's fields in place, keeping its id and
    /// position in the sequence.
    pub fn update(&mut self, id: u32, draft: &StudentDraft) -> Result<Student> {
        let student = draft.commit(id)?;
        let slot = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RosterError::StudentNotFound { id })?;
        *slot = student.clone();
        info!("updated student {id}");
        self.persist();
        Ok(student)
    }

    /// Remove a record. Confirmation is the caller's responsibility; the
    /// store removes unconditionally.
    pub fn remove(&mut self, id: u32) -> Result<()> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(RosterError::StudentNotFound { id })?;
        let removed = self.students.remove(index);
        info!("removed student {} ({})", removed.id, removed.name);
        self.persist();
        Ok(())
    }

    /// Discard the current roster and criteria and restore the seed set.
    /// The seed set is persisted immediately.
    pub fn reset(&mut self) -> &[Student] {
        self.students = seed_roster();
        self.criteria = Criteria::default();
        info!("roster reset to seed data");
        self.persist();
        &self.students
    }

    /// Lazy filtered view under explicit criteria, in insertion order.
    pub fn query<'a>(&'a self, criteria: &'a Criteria) -> impl Iterator<Item = &'a Student> {
        self.students.iter().filter(move |s| criteria.matches(s))
    }

    /// Filtered view under the store's current criteria.
    pub fn filtered(&self) -> impl Iterator<Item = &Student> {
        self.query(&self.criteria)
    }

    /// Distinct class labels in first-seen order.
    pub fn distinct_classes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.students
            .iter()
            .map(|s| s.class.as_str())
            .filter(|class| seen.insert(*class))
            .collect()
    }

    /// Update the search text used by [`filtered`](Self::filtered).
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.criteria.name_query = text.into();
    }

    /// Update the class selector. `None` or an empty label shows all
    /// classes.
    pub fn set_class_filter(&mut self, class: Option<String>) {
        self.criteria.class_equals = class.filter(|c| !c.is_empty());
    }

    fn next_id(&self) -> u32 {
        self.students.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    fn persist(&self) {
        if let Err(err) = self.snapshots.save(&self.students) {
            warn!("failed to persist roster snapshot: {err}");
        }
    }
}

/// Check the at-rest invariants: pairwise-distinct ids and complete
/// records.
fn roster_is_well_formed(records: &[Student]) -> bool {
    let mut ids = HashSet::new();
    records.iter().all(|s| s.is_complete() && ids.insert(s.id))
}
