//! The default roster used when no snapshot exists.

use crate::roster::student::Student;

/// Produce the fixed 5-record sample roster.
///
/// This is the state a fresh install starts from, and what [`reset`]
/// restores.
///
/// [`reset`]: crate::roster::RosterStore::reset
pub fn seed_roster() -> Vec<Student> {
    [
        (1, "Nguyễn Văn A", "CNTT1", 20),
        (2, "Trần Thị B", "CNTT2", 21),
        (3, "Lê Văn C", "HTTT1", 22),
        (4, "Phạm Thị D", "CNTT1", 20),
        (5, "Hoàng Văn E", "HTTT2", 21),
    ]
    .into_iter()
    .map(|(id, name, class, age)| Student {
        id,
        name: name.to_string(),
        class: class.to_string(),
        age,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster_shape() {
        let seed = seed_roster();

        assert_eq!(seed.len(), 5);
        assert_eq!(seed.iter().map(|s| s.id).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert!(seed.iter().all(Student::is_complete));
    }
}
