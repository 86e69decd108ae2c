//! Lesson routes — public listing and detail, authenticated generation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use uuid::Uuid;

use lessons::LessonFilter;
use lessons::filter::{apply, lessons_in_month};
use lessons::plan::credits_remaining;

use crate::routes::auth::{AuthUser, COOKIE_NAME};
use crate::routes::pages::internal_error;
use crate::services;
use crate::services::datastore::DatastoreError;
use crate::services::generate::{GenerateError, GenerateRequest, generate_lesson};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FilterQuery {
    pub grade: Option<i32>,
    pub subject: Option<String>,
}

/// `GET /lessons` — listing. Browsable without a session; the datastore's
/// row security decides what the anon role sees.
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<FilterQuery>,
) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value);
    let rows = match state.datastore.list_lessons(token).await {
        Ok(rows) => rows,
        Err(e) => return internal_error(e),
    };

    let filter = LessonFilter { grade: query.grade, subject: query.subject };
    let visible = apply(&filter, rows);
    Html(client::pages::lessons::render(visible, filter)).into_response()
}

/// `GET /lessons/{id}` — detail page.
pub async fn show(State(state): State<AppState>, jar: CookieJar, Path(id): Path<Uuid>) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value);
    match state.datastore.lesson(token, id).await {
        Ok(lesson) => Html(client::pages::lesson::render(lesson)).into_response(),
        Err(DatastoreError::NotFound) => (StatusCode::NOT_FOUND, "No such lesson plan.").into_response(),
        Err(e) => internal_error(e),
    }
}

#[derive(Deserialize)]
pub struct NewLessonQuery {
    pub error: Option<String>,
}

/// `GET /lessons/new` — the generation form, with remaining credits.
pub async fn new_form(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<NewLessonQuery>,
) -> Response {
    let mine = match state.datastore.lessons_for_user(Some(&auth.token), auth.user.id).await {
        Ok(rows) => rows,
        Err(e) => return internal_error(e),
    };
    let (_, tier) = match services::resolve_tier(&state, &auth.token, auth.user.id).await {
        Ok(pair) => pair,
        Err(e) => return internal_error(e),
    };

    let now = time::OffsetDateTime::now_utc();
    let remaining = credits_remaining(tier, mine.len(), lessons_in_month(&mine, now));
    Html(client::pages::new_lesson::render(remaining, state.llm.is_some(), query.error)).into_response()
}

#[derive(Deserialize)]
pub struct NewLessonForm {
    pub title: String,
    pub grade: i32,
    pub subject: String,
}

/// `POST /lessons/new` — generate and store, then show the result.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    axum::Form(form): axum::Form<NewLessonForm>,
) -> Response {
    let title = form.title.trim().to_owned();
    if title.is_empty() {
        return Redirect::to("/lessons/new?error=failed").into_response();
    }

    let request = GenerateRequest { title, grade: vec![form.grade], subject: vec![form.subject] };
    match generate_lesson(&state, &auth.user, &auth.token, request).await {
        Ok(lesson) => Redirect::to(&format!("/lessons/{}", lesson.id)).into_response(),
        Err(GenerateError::Disabled) => {
            (StatusCode::SERVICE_UNAVAILABLE, "Lesson generation is not available right now.").into_response()
        }
        Err(GenerateError::NoCredits) => Redirect::to("/account?error=credits").into_response(),
        Err(GenerateError::RateLimited(_)) => Redirect::to("/lessons/new?error=rate_limited").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "lesson generation failed");
            Redirect::to("/lessons/new?error=failed").into_response()
        }
    }
}
