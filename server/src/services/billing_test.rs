use super::*;

fn client_for(server: &mockito::ServerGuard) -> BillingClient {
    BillingClient::new(BillingConfig {
        secret_key: "sk_test_123".to_owned(),
        price_pro: "price_pro".to_owned(),
        price_unlimited: "price_unl".to_owned(),
        api_base: server.url(),
    })
    .unwrap()
}

fn checkout_params<'a>(price_id: &'a str, site: &'a str) -> CheckoutParams<'a> {
    CheckoutParams {
        price_id,
        customer_email: "teacher@example.com",
        client_reference_id: "11111111-2222-3333-4444-555555555555",
        success_url: site,
        cancel_url: site,
    }
}

#[test]
fn plan_choice_from_param() {
    assert_eq!(PlanChoice::from_param("pro"), Some(PlanChoice::Pro));
    assert_eq!(PlanChoice::from_param("super"), Some(PlanChoice::Unlimited));
    assert_eq!(PlanChoice::from_param("unlimited"), Some(PlanChoice::Unlimited));
    assert_eq!(PlanChoice::from_param("free"), None);
    assert_eq!(PlanChoice::from_param(""), None);
}

#[tokio::test]
async fn create_checkout_session_posts_price_and_parses_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/checkout/sessions")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("mode".into(), "subscription".into()),
            mockito::Matcher::UrlEncoded("line_items[0][price]".into(), "price_pro".into()),
            mockito::Matcher::UrlEncoded("line_items[0][quantity]".into(), "1".into()),
            mockito::Matcher::UrlEncoded("customer_email".into(), "teacher@example.com".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id":"cs_test_1","url":"https://checkout.example.com/cs_test_1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let session = client
        .create_checkout_session(checkout_params("price_pro", "https://lessongo.example/account"))
        .await
        .unwrap();

    assert_eq!(session.id, "cs_test_1");
    assert_eq!(session.url, "https://checkout.example.com/cs_test_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn checkout_api_error_surfaces_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/checkout/sessions")
        .with_status(402)
        .with_body(r#"{"error":{"message":"card declined"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .create_checkout_session(checkout_params("price_pro", "https://x.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, BillingError::Api { status: 402, .. }));
}

#[tokio::test]
async fn create_portal_session_posts_customer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/billing_portal/sessions")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("customer".into(), "cus_123".into()),
            mockito::Matcher::UrlEncoded("return_url".into(), "https://lessongo.example/account".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id":"bps_1","url":"https://portal.example.com/bps_1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let session = client
        .create_portal_session("cus_123", "https://lessongo.example/account")
        .await
        .unwrap();
    assert_eq!(session.url, "https://portal.example.com/bps_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn portal_decode_failure_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/billing_portal/sessions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.create_portal_session("cus_123", "https://x.example").await.unwrap_err();
    assert!(matches!(err, BillingError::Decode(_)));
}

#[test]
fn price_for_plan() {
    let config = BillingConfig {
        secret_key: "sk".to_owned(),
        price_pro: "price_pro".to_owned(),
        price_unlimited: "price_unl".to_owned(),
        api_base: DEFAULT_BILLING_API_BASE.to_owned(),
    };
    let client = BillingClient::new(config).unwrap();
    assert_eq!(client.price_for(PlanChoice::Pro), "price_pro");
    assert_eq!(client.price_for(PlanChoice::Unlimited), "price_unl");
    assert_eq!(client.prices().pro, "price_pro");
}
