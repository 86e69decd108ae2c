//! Shared lesson-plan domain model.
//!
//! This crate owns the record shapes fetched from the hosted datastore and
//! the pure traversal logic both the `server` and `client` crates render
//! from: grade/subject label lookup, paragraph splitting, month filtering,
//! and plan/credit arithmetic. It deliberately performs no I/O — rows are
//! fetched elsewhere and only rendered and filtered here.

pub mod catalog;
pub mod filter;
pub mod plan;
pub mod types;

pub use filter::LessonFilter;
pub use plan::{PlanTier, PriceCatalog};
pub use types::{Lesson, LessonContent, NewLesson, Section, Subscription, SubscriptionStatus};
