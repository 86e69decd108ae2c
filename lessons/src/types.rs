//! Record shapes for the hosted `lessons` and `subscriptions` tables.
//!
//! DESIGN
//! ======
//! These mirror rows owned by the external datastore; this application does
//! not control their lifecycle or validation. Deserialization is therefore
//! defensive: optional columns default, and unknown subscription statuses
//! map to [`SubscriptionStatus::Unknown`] instead of failing the page.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// LESSON
// =============================================================================

/// One block of lesson-plan text. Paragraph boundaries are newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub content: String,
}

impl Section {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

/// The five content sections of a lesson plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    #[serde(default)]
    pub objectives: Section,
    #[serde(default)]
    pub materials: Section,
    #[serde(default)]
    pub instructions: Section,
    #[serde(default)]
    pub practice: Section,
    #[serde(default)]
    pub differentiation: Section,
}

/// A lesson row as returned by the datastore's row API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    /// Grade values per [`crate::catalog::GRADES`]; may be empty.
    #[serde(default)]
    pub grade: Vec<i32>,
    #[serde(default)]
    pub subject: Vec<String>,
    #[serde(default)]
    pub content: LessonContent,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Insert payload for a new lesson row. The datastore assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct NewLesson {
    pub user_id: Uuid,
    pub title: String,
    pub overview: Option<String>,
    pub grade: Vec<i32>,
    pub subject: Vec<String>,
    pub content: LessonContent,
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Subscription lifecycle status as reported by the payment processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
    Incomplete,
    IncompleteExpired,
    Unpaid,
    Paused,
    /// Any status this build does not know about.
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    /// Whether the subscription currently grants its paid tier.
    #[must_use]
    pub fn grants_access(self) -> bool {
        matches!(self, Self::Active | Self::Trialing)
    }
}

/// A subscription row as synced from the payment processor into the
/// datastore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub user_id: Uuid,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub price_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub current_period_end: OffsetDateTime,
    #[serde(default)]
    pub cancel_at_period_end: bool,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
