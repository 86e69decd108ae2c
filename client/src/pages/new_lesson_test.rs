use super::*;

#[test]
fn credits_hint_pluralizes() {
    assert_eq!(credits_hint(Some(3)), Some("3 lesson credits remaining.".to_owned()));
    assert_eq!(credits_hint(Some(1)), Some("1 lesson credit remaining.".to_owned()));
    assert_eq!(credits_hint(Some(0)), Some("0 lesson credits remaining.".to_owned()));
}

#[test]
fn credits_hint_absent_for_unlimited() {
    assert_eq!(credits_hint(None), None);
}

#[test]
fn error_message_codes() {
    assert!(error_message("rate_limited").unwrap().contains("too fast"));
    assert!(error_message("failed").is_some());
    assert_eq!(error_message("nope"), None);
}

#[test]
fn renders_catalog_options() {
    let html = view! {
        <NewLessonPage remaining=Some(5) generation_enabled=true error=None/>
    }
    .to_html();
    assert!(html.contains("Kindergarten"));
    assert!(html.contains("12th grade"));
    assert!(html.contains("Social Studies"));
    assert!(html.contains("action=\"/lessons/new\""));
    assert!(html.contains("5 lesson credits remaining."));
}

#[test]
fn out_of_credits_notice() {
    let html = view! {
        <NewLessonPage remaining=Some(0) generation_enabled=true error=None/>
    }
    .to_html();
    assert!(html.contains("Upgrade your plan"));
}

#[test]
fn disabled_generation_notice() {
    let html = view! {
        <NewLessonPage remaining=None generation_enabled=false error=None/>
    }
    .to_html();
    assert!(html.contains("isn't available") || html.contains("isn&#x27;t available") || html.contains("available right now"));
}
