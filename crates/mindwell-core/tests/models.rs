use mindwell_core::models::goal::{Goal, GoalCategory};
use mindwell_core::models::mood::{MoodLabel, MoodLog};
use mindwell_core::models::schedule::{ScheduleItem, ScheduleKind};

#[test]
fn goal_reads_store_field_names() {
    let json = r#"{
        "id": "g1",
        "title": "Finish thesis",
        "category": "Mental Health",
        "subTasks": [{"id": "s1", "text": "Outline", "completed": true}],
        "userProfileId": "u1"
    }"#;
    let goal: Goal = serde_json::from_str(json).unwrap();
    assert_eq!(goal.category, GoalCategory::MentalHealth);
    assert_eq!(goal.sub_tasks.len(), 1);
    assert!(goal.description.is_none());
}

#[test]
fn goal_never_serializes_progress() {
    let goal = Goal {
        id: "g1".into(),
        title: "Run".into(),
        category: GoalCategory::Fitness,
        description: None,
        sub_tasks: Vec::new(),
        user_profile_id: "u1".into(),
    };
    let value = serde_json::to_value(&goal).unwrap();
    assert!(value.get("progress").is_none());
    assert!(value.get("userProfileId").is_some());
}

#[test]
fn schedule_item_type_field() {
    let json = r#"{
        "id": "s1",
        "title": "Chem exam",
        "date": "2026-10-21T09:00:00Z",
        "type": "exam",
        "userProfileId": "u1"
    }"#;
    let item: ScheduleItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.kind, ScheduleKind::Exam);
    assert!(item.kind.is_deadline());
    assert!(!ScheduleKind::Event.is_deadline());
}

#[test]
fn mood_presets_match_check_in_card() {
    assert_eq!(MoodLabel::Happy.preset_rating(), 9);
    assert_eq!(MoodLabel::Anxious.preset_rating(), 1);
    let log: MoodLog = serde_json::from_str(
        r#"{"userProfileId":"u","mood":"Calm","rating":8,"timestamp":"2026-10-19T08:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(log.mood, MoodLabel::Calm);
    assert!(log.id.is_none());
}
