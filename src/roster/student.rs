//! Student records and draft input.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A committed roster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique within the roster. Assigned by the store, never changed.
    pub id: u32,

    /// Full name, non-empty.
    pub name: String,

    /// Free-form class/section label, non-empty. Compared by string
    /// equality only.
    pub class: String,

    /// Age in years, positive.
    pub age: u32,
}

impl Student {
    /// True when every field satisfies the at-rest invariants.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.class.is_empty() && self.age > 0
    }
}

/// Uncommitted form input for a new or edited student.
///
/// Fields hold raw text exactly as entered; nothing is checked or parsed
/// until the draft is committed. A draft never becomes part of the roster
/// on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub class: String,
    pub age: String,
}

impl StudentDraft {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            age: age.into(),
        }
    }

    /// Validate the draft and produce the record it describes.
    ///
    /// Checks are presence-only, plus `age` parsing as a positive integer.
    pub fn commit(&self, id: u32) -> Result<Student> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.class.is_empty() {
            missing.push("class");
        }
        if self.age.is_empty() {
            missing.push("age");
        }
        if !missing.is_empty() {
            return Err(RosterError::Validation { fields: missing });
        }

        let age = match self.age.parse::<u32>() {
            Ok(age) if age > 0 => age,
            _ => return Err(RosterError::Validation { fields: vec!["age"] }),
        };

        Ok(Student {
            id,
            name: self.name.clone(),
            class: self.class.clone(),
            age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_commit_valid_draft() {
        let draft = StudentDraft::new("Ngô Thị F", "CNTT1", "19");
        let student = draft.commit(7).unwrap();

        assert_eq!(student.id, 7);
        assert_eq!(student.name, "Ngô Thị F");
        assert_eq!(student.class, "CNTT1");
        assert_eq!(student.age, 19);
        assert!(student.is_complete());
    }

    #[test_case("", "CNTT1", "20", &["name"] ; "empty name")]
    #[test_case("An", "", "20", &["class"] ; "empty class")]
    #[test_case("An", "CNTT1", "", &["age"] ; "empty age")]
    #[test_case("", "", "20", &["name", "class"] ; "two empty fields")]
    #[test_case("", "", "", &["name", "class", "age"] ; "all empty")]
    fn test_commit_rejects_missing_fields(
        name: &str,
        class: &str,
        age: &str,
        expected: &[&'static str],
    ) {
        let err = StudentDraft::new(name, class, age).commit(1).unwrap_err();
        assert_eq!(
            err,
            RosterError::Validation {
                fields: expected.to_vec()
            }
        );
    }

    #[test_case("twenty" ; "not a number")]
    #[test_case("0" ; "zero")]
    #[test_case("-3" ; "negative")]
    #[test_case("20.5" ; "fractional")]
    fn test_commit_rejects_unusable_age(age: &str) {
        let err = StudentDraft::new("An", "CNTT1", age).commit(1).unwrap_err();
        assert_eq!(
            err,
            RosterError::Validation {
                fields: vec!["age"]
            }
        );
    }

    #[test]
    fn test_incomplete_record_detection() {
        let student = Student {
            id: 1,
            name: String::new(),
            class: "CNTT1".to_string(),
            age: 20,
        };
        assert!(!student.is_complete());
    }
}
