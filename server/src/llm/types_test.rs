use super::*;

#[test]
fn request_errors_are_retryable() {
    assert!(LlmError::ApiRequest("timeout".into()).retryable());
}

#[test]
fn rate_limit_and_server_errors_are_retryable() {
    assert!(LlmError::ApiResponse { status: 429, body: String::new() }.retryable());
    assert!(LlmError::ApiResponse { status: 503, body: String::new() }.retryable());
}

#[test]
fn client_errors_are_not_retryable() {
    assert!(!LlmError::ApiResponse { status: 400, body: String::new() }.retryable());
    assert!(!LlmError::ApiParse("bad".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "K".into() }.retryable());
}

#[test]
fn message_user_constructor() {
    let m = Message::user("hello");
    assert_eq!(m.role, Role::User);
    assert_eq!(m.content, "hello");
}

#[test]
fn message_serializes_with_lowercase_role() {
    let json = serde_json::to_value(Message::user("hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi" }));
}
