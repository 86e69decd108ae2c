//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page routes render HTML via the `client` crate; action routes answer
//! with redirects. Static assets (stylesheet, hero art) are served from
//! `public/` under `/public`.

pub mod auth;
pub mod billing;
pub mod lessons;
pub mod pages;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the static asset directory.
fn public_dir() -> PathBuf {
    std::env::var("PUBLIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"))
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        .route("/account", get(pages::account))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/auth/logout", post(auth::logout))
        .route("/lessons", get(lessons::index))
        .route("/lessons/new", get(lessons::new_form).post(lessons::create))
        .route("/lessons/{id}", get(lessons::show))
        .route("/billing/checkout", post(billing::checkout))
        .route("/billing/portal", post(billing::portal))
        .route("/healthz", get(healthz))
        .nest_service("/public", ServeDir::new(public_dir()))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers::test_app_state;

    // Axum validates route patterns at registration; building the router
    // catches syntax drift in one place.
    #[test]
    fn router_builds() {
        let _ = app(test_app_state("http://localhost:54321"));
    }
}
