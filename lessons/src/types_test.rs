use super::*;

#[test]
fn lesson_row_deserializes_from_datastore_shape() {
    let json = serde_json::json!({
        "id": "7e6c2f1a-9a8e-4f5b-8a4f-0a1b2c3d4e5f",
        "user_id": "11111111-2222-3333-4444-555555555555",
        "title": "charlotte's web",
        "overview": "A novel study.",
        "grade": [3, 4],
        "subject": ["English Language Arts"],
        "content": {
            "objectives": { "content": "Identify themes.\nDiscuss characters." },
            "materials": { "content": "Book copies." }
        },
        "created_at": "2026-03-10T12:00:00+00:00"
    });
    let lesson: Lesson = serde_json::from_value(json).unwrap();
    assert_eq!(lesson.title, "charlotte's web");
    assert_eq!(lesson.grade, vec![3, 4]);
    assert_eq!(lesson.content.objectives.content, "Identify themes.\nDiscuss characters.");
    // Sections absent from the row default to empty.
    assert_eq!(lesson.content.practice, Section::default());
    assert_eq!(lesson.created_at.year(), 2026);
}

#[test]
fn lesson_row_tolerates_missing_optional_columns() {
    let json = serde_json::json!({
        "id": "7e6c2f1a-9a8e-4f5b-8a4f-0a1b2c3d4e5f",
        "user_id": "11111111-2222-3333-4444-555555555555",
        "title": "untitled",
        "created_at": "2026-01-05T08:30:00Z"
    });
    let lesson: Lesson = serde_json::from_value(json).unwrap();
    assert_eq!(lesson.overview, None);
    assert!(lesson.grade.is_empty());
    assert!(lesson.subject.is_empty());
    assert_eq!(lesson.content, LessonContent::default());
}

#[test]
fn subscription_status_unknown_catch_all() {
    let sub: Subscription = serde_json::from_value(serde_json::json!({
        "id": "sub_9",
        "user_id": "11111111-2222-3333-4444-555555555555",
        "status": "some_future_status",
        "price_id": "price_pro",
        "current_period_end": "2026-09-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(sub.status, SubscriptionStatus::Unknown);
    assert!(!sub.status.grants_access());
    assert!(!sub.cancel_at_period_end);
}

#[test]
fn subscription_status_access() {
    assert!(SubscriptionStatus::Active.grants_access());
    assert!(SubscriptionStatus::Trialing.grants_access());
    assert!(!SubscriptionStatus::Canceled.grants_access());
    assert!(!SubscriptionStatus::PastDue.grants_access());
}

#[test]
fn new_lesson_serializes_without_row_columns() {
    let new = NewLesson {
        user_id: uuid::Uuid::nil(),
        title: "t".to_owned(),
        overview: None,
        grade: vec![1],
        subject: vec!["Math".to_owned()],
        content: LessonContent::default(),
    };
    let value = serde_json::to_value(&new).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("created_at").is_none());
    assert_eq!(value["grade"], serde_json::json!([1]));
}
