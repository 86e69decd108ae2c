//! Billing routes — checkout and portal redirects.
//!
//! ERROR HANDLING
//! ==============
//! These are browser form posts, so every failure maps to a redirect with
//! a flash code the account page renders; nothing here answers with a bare
//! error status.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::routes::auth::AuthUser;
use crate::services::billing::{CheckoutParams, PlanChoice};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CheckoutForm {
    pub plan: String,
}

/// `POST /billing/checkout` — start a checkout session for a plan.
pub async fn checkout(
    State(state): State<AppState>,
    auth: AuthUser,
    axum::Form(form): axum::Form<CheckoutForm>,
) -> Response {
    let Some(plan) = PlanChoice::from_param(&form.plan) else {
        return Redirect::to("/account?error=checkout").into_response();
    };
    start_checkout(&state, &auth, plan).await
}

/// Create a checkout session and send the browser to it. An already
/// access-granting subscription short-circuits to the `exists` flash
/// instead of double-subscribing.
pub(crate) async fn start_checkout(state: &AppState, auth: &AuthUser, plan: PlanChoice) -> Response {
    let Some(billing) = state.billing.as_deref() else {
        return Redirect::to("/account?error=checkout").into_response();
    };

    match state.datastore.subscription_for_user(Some(&auth.token), auth.user.id).await {
        Ok(Some(sub)) if sub.status.grants_access() => {
            return Redirect::to("/account?error=exists").into_response();
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(error = %e, "subscription lookup failed");
            return Redirect::to("/account?error=checkout").into_response();
        }
    }

    let success_url = format!("{}/account?subscribed=true", state.site_url);
    let cancel_url = format!("{}/account", state.site_url);
    let reference = auth.user.id.to_string();
    let params = CheckoutParams {
        price_id: billing.price_for(plan),
        customer_email: &auth.user.email,
        client_reference_id: &reference,
        success_url: &success_url,
        cancel_url: &cancel_url,
    };

    match billing.create_checkout_session(params).await {
        Ok(session) => Redirect::to(&session.url).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "checkout session creation failed");
            Redirect::to("/account?error=checkout").into_response()
        }
    }
}

/// `POST /billing/portal` — send the browser to the customer's billing
/// portal.
pub async fn portal(State(state): State<AppState>, auth: AuthUser) -> Response {
    let Some(billing) = state.billing.as_deref() else {
        return Redirect::to("/account?error=portal").into_response();
    };

    let customer = match state.datastore.customer_id_for_user(Some(&auth.token), auth.user.id).await {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            tracing::warn!(user_id = %auth.user.id, "portal requested without a billing customer");
            return Redirect::to("/account?error=portal").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "customer lookup failed");
            return Redirect::to("/account?error=portal").into_response();
        }
    };

    let return_url = format!("{}/account", state.site_url);
    match billing.create_portal_session(&customer, &return_url).await {
        Ok(session) => Redirect::to(&session.url).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "portal session creation failed");
            Redirect::to("/account?error=portal").into_response()
        }
    }
}

#[cfg(test)]
#[path = "billing_test.rs"]
mod tests;
