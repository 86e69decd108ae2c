//! Lesson generation — prompt building, response parsing, credit gating.
//!
//! DESIGN
//! ======
//! The model is asked for six fixed markdown sections; `parse_generated`
//! is a pure function over that text so the parsing rules are testable
//! without a provider. Credit and rate-limit checks run before the
//! provider call — a rejected request must not burn quota.

use lessons::catalog::{grade_labels, subject_line};
use lessons::filter::lessons_in_month;
use lessons::plan::credits_remaining;
use lessons::{Lesson, LessonContent, NewLesson, Section};

use crate::llm::types::{LlmError, Message};
use crate::rate_limit::RateLimitExceeded;
use crate::state::AppState;

use super::datastore::{DatastoreError, SessionUser};

pub const GENERATION_MAX_TOKENS: u32 = 2048;

const SYSTEM_PROMPT: &str = "You are a lesson-planning assistant for teachers. \
Respond with a complete lesson plan in exactly these markdown sections, in this order: \
## Overview, ## Learning Objectives, ## Materials, ## Direct Instruction, \
## Guided Practice, ## Differentiation. Keep the overview to one sentence. \
Within each section write plain paragraphs or newline-separated items, no bullet markers.";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No LLM client configured at startup.
    #[error("lesson generation is not configured")]
    Disabled,

    /// The caller's plan has no lesson credits left.
    #[error("no lesson credits remaining")]
    NoCredits,

    #[error(transparent)]
    RateLimited(#[from] RateLimitExceeded),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Datastore(#[from] DatastoreError),

    /// The model's output did not contain the expected sections.
    #[error("malformed generation output: {0}")]
    Parse(String),
}

// =============================================================================
// REQUEST
// =============================================================================

/// Validated form input for one generation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub title: String,
    pub grade: Vec<i32>,
    pub subject: Vec<String>,
}

fn build_prompt(req: &GenerateRequest) -> String {
    let mut prompt = format!("Write a lesson plan about \"{}\".", req.title);
    let grades = grade_labels(&req.grade);
    if !grades.is_empty() {
        prompt.push_str(&format!("\nGrade level: {grades}."));
    }
    let subjects = subject_line(&req.subject);
    if !subjects.is_empty() {
        prompt.push_str(&format!("\nSubject: {subjects}."));
    }
    prompt
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
struct GeneratedLesson {
    overview: Option<String>,
    content: LessonContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Overview,
    Objectives,
    Materials,
    Instructions,
    Practice,
    Differentiation,
}

fn slot_for_heading(heading: &str) -> Option<Slot> {
    match heading.trim().trim_end_matches(':').to_ascii_lowercase().as_str() {
        "overview" => Some(Slot::Overview),
        "learning objectives" | "objectives" => Some(Slot::Objectives),
        "materials" => Some(Slot::Materials),
        "direct instruction" | "instruction" => Some(Slot::Instructions),
        "guided practice" | "practice" => Some(Slot::Practice),
        "differentiation" => Some(Slot::Differentiation),
        _ => None,
    }
}

/// Split model output into the lesson's sections.
///
/// Text before the first recognized heading and under unrecognized
/// headings is dropped. Learning Objectives must end up non-empty; the
/// other sections may be missing.
fn parse_generated(text: &str) -> Result<GeneratedLesson, String> {
    let mut overview = String::new();
    let mut objectives = String::new();
    let mut materials = String::new();
    let mut instructions = String::new();
    let mut practice = String::new();
    let mut differentiation = String::new();

    let mut current: Option<Slot> = None;
    for line in text.lines() {
        if let Some(heading) = line.trim().strip_prefix("## ") {
            current = slot_for_heading(heading);
            continue;
        }
        let Some(slot) = current else { continue };
        let buffer = match slot {
            Slot::Overview => &mut overview,
            Slot::Objectives => &mut objectives,
            Slot::Materials => &mut materials,
            Slot::Instructions => &mut instructions,
            Slot::Practice => &mut practice,
            Slot::Differentiation => &mut differentiation,
        };
        if !buffer.is_empty() {
            buffer.push('\n');
        }
        buffer.push_str(line.trim_end());
    }

    let objectives = objectives.trim().to_owned();
    if objectives.is_empty() {
        return Err("missing Learning Objectives section".to_owned());
    }

    let overview = overview.trim();
    Ok(GeneratedLesson {
        overview: (!overview.is_empty()).then(|| overview.to_owned()),
        content: LessonContent {
            objectives: Section::new(objectives),
            materials: Section::new(materials.trim()),
            instructions: Section::new(instructions.trim()),
            practice: Section::new(practice.trim()),
            differentiation: Section::new(differentiation.trim()),
        },
    })
}

// =============================================================================
// ORCHESTRATION
// =============================================================================

/// Generate a lesson for the caller and store it. Runs the credit and
/// rate-limit gates, calls the provider, parses, inserts.
pub async fn generate_lesson(
    state: &AppState,
    user: &SessionUser,
    token: &str,
    req: GenerateRequest,
) -> Result<Lesson, GenerateError> {
    let Some(llm) = state.llm.as_ref() else {
        return Err(GenerateError::Disabled);
    };

    let mine = state.datastore.lessons_for_user(Some(token), user.id).await?;
    let (_, tier) = super::resolve_tier(state, token, user.id).await?;
    let now = time::OffsetDateTime::now_utc();
    if credits_remaining(tier, mine.len(), lessons_in_month(&mine, now)) == Some(0) {
        return Err(GenerateError::NoCredits);
    }

    state.rate_limiter.check_and_record(user.id)?;

    let prompt = build_prompt(&req);
    let response = llm.chat(GENERATION_MAX_TOKENS, SYSTEM_PROMPT, &[Message::user(prompt)]).await?;
    tracing::info!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "lesson generated"
    );

    let generated = parse_generated(&response.text).map_err(GenerateError::Parse)?;
    let new = NewLesson {
        user_id: user.id,
        title: req.title,
        overview: generated.overview,
        grade: req.grade,
        subject: req.subject,
        content: generated.content,
    };
    Ok(state.datastore.insert_lesson(Some(token), &new).await?)
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
