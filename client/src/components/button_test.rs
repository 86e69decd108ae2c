use super::*;

#[test]
fn primary_classes() {
    let classes = button_classes(ButtonVariant::Primary, false);
    assert!(classes.contains("bg-black"));
    assert!(!classes.contains("w-full"));
}

#[test]
fn outline_full_width_classes() {
    let classes = button_classes(ButtonVariant::Outline, true);
    assert!(classes.contains("border-2"));
    assert!(!classes.contains("bg-black"));
    assert!(classes.ends_with("w-full"));
}

#[test]
fn renders_as_submit_button() {
    let html = view! { <Button>"Upgrade to Pro"</Button> }.to_html();
    assert!(html.contains("type=\"submit\""));
    assert!(html.contains("Upgrade to Pro"));
}
