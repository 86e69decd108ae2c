use super::*;

#[test]
fn document_wraps_body_with_title() {
    let html = document("Lesson plans | Lessongo", view! { <h1>"Lesson plans"</h1> });
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>Lesson plans | Lessongo</title>"));
    assert!(html.contains("<h1>Lesson plans</h1>"));
}

#[test]
fn document_escapes_title_text() {
    let html = document("a < b", view! { <div></div> });
    assert!(html.contains("a &lt; b"));
}
