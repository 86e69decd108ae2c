//! Grade and subject catalog.
//!
//! Lesson rows store grades as integers and subjects as free strings; the
//! UI presents both through these fixed tables. Unknown grade values are
//! skipped when joining labels rather than rendered as placeholders.

/// Ordered `(value, label)` grade table. Kindergarten is 0.
pub const GRADES: &[(i32, &str)] = &[
    (0, "Kindergarten"),
    (1, "1st grade"),
    (2, "2nd grade"),
    (3, "3rd grade"),
    (4, "4th grade"),
    (5, "5th grade"),
    (6, "6th grade"),
    (7, "7th grade"),
    (8, "8th grade"),
    (9, "9th grade"),
    (10, "10th grade"),
    (11, "11th grade"),
    (12, "12th grade"),
];

/// Subjects offered by the lesson form and listing filter.
pub const SUBJECTS: &[&str] = &[
    "English Language Arts",
    "Math",
    "Science",
    "Social Studies",
    "Art",
    "Music",
    "Physical Education",
    "Health",
    "Technology",
];

/// Label for a single grade value.
#[must_use]
pub fn grade_label(value: i32) -> Option<&'static str> {
    GRADES.iter().find(|(v, _)| *v == value).map(|(_, label)| *label)
}

/// Join a lesson's grade values into a display line, skipping unknown values.
#[must_use]
pub fn grade_labels(values: &[i32]) -> String {
    values
        .iter()
        .filter_map(|v| grade_label(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join a lesson's subjects into a display line.
#[must_use]
pub fn subject_line(subjects: &[String]) -> String {
    subjects.join(", ")
}

/// Whether a subject string is one the catalog offers.
#[must_use]
pub fn is_known_subject(subject: &str) -> bool {
    SUBJECTS.contains(&subject)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
