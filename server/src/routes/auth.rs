//! Auth routes — session cookie handling, login/register/logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sessions are issued by the hosted auth service; this layer only moves
//! its access token between the session cookie and outbound requests.
//! Page handlers require auth via the [`AuthUser`] extractor, which
//! rejects by redirecting to the login page with a `return_url` back to
//! the original request.

use axum::extract::{FromRef, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use client::util::urls::query_escape;

use crate::services::datastore::{DatastoreError, SessionUser};
use crate::state::AppState;

pub const COOKIE_NAME: &str = "session_token";

const SESSION_MAX_AGE_DAYS: i64 = 7;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("SITE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

/// Only same-site path targets survive the round trip; anything else
/// falls back to the account page.
pub(crate) fn safe_return_url(raw: Option<&str>) -> String {
    match raw {
        Some(target) if target.starts_with('/') && !target.starts_with("//") => target.to_owned(),
        _ => "/account".to_owned(),
    }
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(login_redirect(parts));
        }

        let app_state = AppState::from_ref(state);
        match app_state.datastore.user(token).await {
            Ok(Some(user)) => Ok(Self { user, token: token.to_owned() }),
            Ok(None) => Err(login_redirect(parts)),
            Err(e) => {
                tracing::error!(error = %e, "session lookup failed");
                Err(login_redirect(parts))
            }
        }
    }
}

fn login_redirect(parts: &axum::http::request::Parts) -> Redirect {
    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| "/".to_owned());
    Redirect::temporary(&format!("/login?return_url={}", query_escape(&target)))
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
    pub return_url: Option<String>,
}

/// `POST /auth/login` — password sign-in against the hosted auth API.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::Form(form): axum::Form<CredentialsForm>,
) -> Response {
    let return_url = safe_return_url(form.return_url.as_deref());
    match state.datastore.sign_in(&form.email, &form.password).await {
        Ok(token) => {
            let jar = jar.add(session_cookie(token));
            (jar, Redirect::to(&return_url)).into_response()
        }
        Err(DatastoreError::Api { status: 400 | 401 | 403, .. }) => {
            failed_login_redirect(&return_url, "invalid").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "sign-in call failed");
            failed_login_redirect(&return_url, "invalid").into_response()
        }
    }
}

fn failed_login_redirect(return_url: &str, error: &str) -> Redirect {
    Redirect::to(&format!("/login?error={error}&return_url={}", query_escape(return_url)))
}

/// `POST /auth/register` — sign-up; sets the session cookie when the
/// provider issues one immediately, otherwise routes through the
/// email-confirmation notice.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::Form(form): axum::Form<CredentialsForm>,
) -> Response {
    let return_url = safe_return_url(form.return_url.as_deref());
    match state.datastore.sign_up(&form.email, &form.password).await {
        Ok(Some(token)) => {
            let jar = jar.add(session_cookie(token));
            (jar, Redirect::to(&return_url)).into_response()
        }
        Ok(None) => {
            Redirect::to(&format!("/login?notice=confirm&return_url={}", query_escape(&return_url)))
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-up rejected");
            Redirect::to(&format!("/register?error=signup&return_url={}", query_escape(&return_url)))
                .into_response()
        }
    }
}

/// `POST /auth/logout` — revoke the remote session (best effort), clear
/// the cookie, back to the home page.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        if let Err(e) = state.datastore.sign_out(cookie.value()).await {
            tracing::warn!(error = %e, "remote sign-out failed");
        }
    }
    let jar = jar.remove(Cookie::build((COOKIE_NAME, "")).path("/").build());
    (jar, Redirect::to("/")).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
