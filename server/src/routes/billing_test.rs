use super::*;
use crate::state::test_helpers::{test_app_state, test_app_state_with_billing};
use axum::http::StatusCode;
use lessons::SubscriptionStatus;

fn auth_user() -> AuthUser {
    AuthUser {
        user: crate::services::datastore::SessionUser {
            id: "11111111-2222-3333-4444-555555555555".parse().unwrap(),
            email: "teacher@example.com".to_owned(),
        },
        token: "tok".to_owned(),
    }
}

fn location(response: &Response) -> &str {
    response.headers().get("location").unwrap().to_str().unwrap()
}

fn subscription_row(status: SubscriptionStatus) -> serde_json::Value {
    serde_json::json!([{
        "id": "sub_1",
        "user_id": "11111111-2222-3333-4444-555555555555",
        "status": serde_json::to_value(status).unwrap(),
        "price_id": "price_pro",
        "current_period_end": "2026-09-01T00:00:00Z",
        "cancel_at_period_end": false
    }])
}

fn subscriptions_path(auth: &AuthUser) -> String {
    format!(
        "/rest/v1/subscriptions?select=*&user_id=eq.{}&order=current_period_end.desc&limit=1",
        auth.user.id
    )
}

#[tokio::test]
async fn start_checkout_without_billing_redirects_with_flash() {
    let state = test_app_state("http://localhost:54321");
    let response = start_checkout(&state, &auth_user(), PlanChoice::Pro).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/account?error=checkout");
}

#[tokio::test]
async fn start_checkout_with_active_subscription_is_exists() {
    let mut datastore = mockito::Server::new_async().await;
    let billing = mockito::Server::new_async().await;
    let auth = auth_user();

    datastore
        .mock("GET", subscriptions_path(&auth).as_str())
        .with_status(200)
        .with_body(subscription_row(SubscriptionStatus::Active).to_string())
        .create_async()
        .await;

    let state = test_app_state_with_billing(&datastore.url(), &billing.url());
    let response = start_checkout(&state, &auth, PlanChoice::Pro).await;
    assert_eq!(location(&response), "/account?error=exists");
}

#[tokio::test]
async fn start_checkout_redirects_to_session_url() {
    let mut datastore = mockito::Server::new_async().await;
    let mut billing = mockito::Server::new_async().await;
    let auth = auth_user();

    datastore
        .mock("GET", subscriptions_path(&auth).as_str())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    billing
        .mock("POST", "/v1/checkout/sessions")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("line_items[0][price]".into(), "price_pro".into()),
            mockito::Matcher::UrlEncoded(
                "success_url".into(),
                "http://localhost:3000/account?subscribed=true".into(),
            ),
        ]))
        .with_status(200)
        .with_body(r#"{"id":"cs_1","url":"https://checkout.example.com/cs_1"}"#)
        .create_async()
        .await;

    let state = test_app_state_with_billing(&datastore.url(), &billing.url());
    let response = start_checkout(&state, &auth, PlanChoice::Pro).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "https://checkout.example.com/cs_1");
}

#[tokio::test]
async fn canceled_subscription_does_not_block_checkout() {
    let mut datastore = mockito::Server::new_async().await;
    let mut billing = mockito::Server::new_async().await;
    let auth = auth_user();

    datastore
        .mock("GET", subscriptions_path(&auth).as_str())
        .with_status(200)
        .with_body(subscription_row(SubscriptionStatus::Canceled).to_string())
        .create_async()
        .await;
    billing
        .mock("POST", "/v1/checkout/sessions")
        .with_status(200)
        .with_body(r#"{"id":"cs_2","url":"https://checkout.example.com/cs_2"}"#)
        .create_async()
        .await;

    let state = test_app_state_with_billing(&datastore.url(), &billing.url());
    let response = start_checkout(&state, &auth, PlanChoice::Pro).await;
    assert_eq!(location(&response), "https://checkout.example.com/cs_2");
}

#[tokio::test]
async fn portal_without_customer_redirects_with_flash() {
    let mut datastore = mockito::Server::new_async().await;
    let billing_server = mockito::Server::new_async().await;
    let auth = auth_user();

    datastore
        .mock(
            "GET",
            format!("/rest/v1/customers?select=customer_id&user_id=eq.{}&limit=1", auth.user.id).as_str(),
        )
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let state = test_app_state_with_billing(&datastore.url(), &billing_server.url());
    let response = portal(axum::extract::State(state), auth).await;
    assert_eq!(location(&response), "/account?error=portal");
}
