//! Roster domain: records, drafts, criteria, seed data, and the store.

pub mod criteria;
pub mod seed;
pub mod store;
pub mod student;

pub use criteria::Criteria;
pub use seed::seed_roster;
pub use store::RosterStore;
pub use student::{Student, StudentDraft};
