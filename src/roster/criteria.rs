//! Search and filter criteria for the derived roster view.

use crate::roster::student::Student;

/// The current search text plus optional class selector.
///
/// Transient state, never persisted. The filtered view is recomputed from
/// the roster and these values on every read; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive substring match against `name`. Empty matches all.
    pub name_query: String,

    /// Exact, case-sensitive match against `class`. `None` matches all.
    pub class_equals: Option<String>,
}

impl Criteria {
    /// Criteria matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_equals = Some(class.into());
        self
    }

    /// Whether a record passes both the search text and the class selector.
    pub fn matches(&self, student: &Student) -> bool {
        let name_ok = self.name_query.is_empty()
            || student
                .name
                .to_lowercase()
                .contains(&self.name_query.to_lowercase());

        let class_ok = self
            .class_equals
            .as_deref()
            .map_or(true, |class| student.class == class);

        name_ok && class_ok
    }

    /// True when neither field restricts the view.
    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty() && self.class_equals.is_none()
    }
}
