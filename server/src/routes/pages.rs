//! Page routes — server-side fetch from the hosted datastore, then render.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use client::pages::account::{AccountData, AccountFlash};
use lessons::filter::lessons_in_month;

use crate::routes::auth::AuthUser;
use crate::routes::billing::start_checkout;
use crate::services;
use crate::services::billing::PlanChoice;
use crate::state::AppState;

/// `GET /` — marketing page, no data fetch.
pub async fn home() -> Html<String> {
    Html(client::pages::home::render())
}

#[derive(Deserialize)]
pub struct AuthPageQuery {
    pub return_url: Option<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// `GET /login`
pub async fn login(Query(query): Query<AuthPageQuery>) -> Html<String> {
    Html(client::pages::login::render(query.return_url, query.error, query.notice))
}

/// `GET /register`
pub async fn register(Query(query): Query<AuthPageQuery>) -> Html<String> {
    Html(client::pages::register::render(query.return_url, query.error))
}

#[derive(Deserialize)]
pub struct AccountQuery {
    pub subscribed: Option<String>,
    pub error: Option<String>,
    pub upgrade: Option<String>,
}

/// `GET /account` — credit meters and subscription management. An
/// `upgrade=` parameter (arriving via the marketing page's post-login
/// redirect) starts checkout in the same request.
pub async fn account(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AccountQuery>,
) -> Response {
    if let Some(plan) = query.upgrade.as_deref().and_then(PlanChoice::from_param) {
        return start_checkout(&state, &auth, plan).await;
    }

    let mine = match state.datastore.lessons_for_user(Some(&auth.token), auth.user.id).await {
        Ok(rows) => rows,
        Err(e) => return internal_error(e),
    };
    let (subscription, tier) = match services::resolve_tier(&state, &auth.token, auth.user.id).await {
        Ok(pair) => pair,
        Err(e) => return internal_error(e),
    };

    let now = time::OffsetDateTime::now_utc();
    let data = AccountData {
        email: auth.user.email,
        tier,
        subscription,
        lessons_total: mine.len(),
        month_count: lessons_in_month(&mine, now),
        flash: AccountFlash::from_query(query.subscribed.as_deref(), query.error.as_deref()),
        billing_enabled: state.billing.is_some(),
    };
    Html(client::pages::account::render(data)).into_response()
}

pub(crate) fn internal_error(e: impl std::fmt::Display) -> Response {
    tracing::error!(error = %e, "page data fetch failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong on our side. Please try again.").into_response()
}
