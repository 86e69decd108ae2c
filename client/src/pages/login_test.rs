use super::*;

#[test]
fn error_message_known_codes() {
    assert_eq!(error_message("invalid"), Some("Invalid email or password."));
    assert!(error_message("signup").is_some());
}

#[test]
fn error_message_unknown_code_renders_nothing() {
    assert_eq!(error_message("teapot"), None);
}

#[test]
fn notice_message_confirm() {
    assert!(notice_message("confirm").unwrap().contains("confirm"));
    assert_eq!(notice_message("other"), None);
}

#[test]
fn register_href_carries_return_target() {
    assert_eq!(register_href(None), "/register");
    assert_eq!(
        register_href(Some("/account?upgrade=pro")),
        "/register?return_url=/account%3Fupgrade%3Dpro"
    );
}

#[test]
fn renders_hidden_return_url_field() {
    let html = view! {
        <LoginPage return_url=Some("/lessons/new".to_owned()) error=None notice=None/>
    }
    .to_html();
    assert!(html.contains("name=\"return_url\""));
    assert!(html.contains("value=\"/lessons/new\""));
    assert!(html.contains("action=\"/auth/login\""));
}

#[test]
fn renders_error_banner_only_for_known_codes() {
    let html = view! {
        <LoginPage return_url=None error=Some("invalid".to_owned()) notice=None/>
    }
    .to_html();
    assert!(html.contains("Invalid email or password."));

    let html = view! {
        <LoginPage return_url=None error=Some("teapot".to_owned()) notice=None/>
    }
    .to_html();
    assert!(!html.contains("bg-red-700"));
}
