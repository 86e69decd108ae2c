//! Listing filters, month counting, and paragraph traversal.
//!
//! All predicates here are pure so the same logic backs both the listing
//! route's query parameters and the account page's monthly credit count.

use time::OffsetDateTime;

use crate::types::Lesson;

// =============================================================================
// LISTING FILTER
// =============================================================================

/// Filter state for the lessons listing, parsed from query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonFilter {
    pub grade: Option<i32>,
    pub subject: Option<String>,
}

impl LessonFilter {
    /// Array-membership match: a lesson passes when every set field appears
    /// in the corresponding lesson array.
    #[must_use]
    pub fn matches(&self, lesson: &Lesson) -> bool {
        if let Some(grade) = self.grade {
            if !lesson.grade.contains(&grade) {
                return false;
            }
        }
        if let Some(subject) = &self.subject {
            if !lesson.subject.iter().any(|s| s == subject) {
                return false;
            }
        }
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grade.is_none() && self.subject.is_none()
    }
}

/// Drop lessons that do not match the filter, preserving order.
#[must_use]
pub fn apply(filter: &LessonFilter, lessons: Vec<Lesson>) -> Vec<Lesson> {
    if filter.is_empty() {
        return lessons;
    }
    lessons.into_iter().filter(|l| filter.matches(l)).collect()
}

// =============================================================================
// MONTH FILTER
// =============================================================================

/// Calendar-month equality: same year and same month.
#[must_use]
pub fn same_calendar_month(a: OffsetDateTime, b: OffsetDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Count lessons created in the calendar month containing `at`.
#[must_use]
pub fn lessons_in_month(lessons: &[Lesson], at: OffsetDateTime) -> usize {
    lessons
        .iter()
        .filter(|l| same_calendar_month(l.created_at, at))
        .count()
}

// =============================================================================
// PARAGRAPHS
// =============================================================================

/// Split a section body into renderable paragraph lines.
///
/// Interior empty lines are preserved; a single trailing empty line from a
/// terminal newline is dropped. Carriage returns are stripped.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
