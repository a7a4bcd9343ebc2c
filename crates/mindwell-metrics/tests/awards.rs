use mindwell_core::models::gamification::Gamification;
use mindwell_metrics::awards::awards;

#[test]
fn missing_document_is_level_one_with_nothing_earned() {
    let summary = awards(None);
    assert_eq!(summary.points, 0);
    assert_eq!(summary.level, 1);
    assert_eq!(summary.earned, 0);
    assert_eq!(summary.total, 8);
    assert!(summary.badges.iter().all(|b| !b.earned));
}

#[test]
fn earned_badges_are_marked() {
    let doc: Gamification = serde_json::from_value(serde_json::json!({
        "userProfileId": "u1",
        "points": 1250,
        "level": 3,
        "badges": ["badge-1", "badge-6"]
    }))
    .unwrap();

    let summary = awards(Some(&doc));

    assert_eq!(summary.points, 1250);
    assert_eq!(summary.level, 3);
    assert_eq!(summary.earned, 2);
    let earned: Vec<_> = summary
        .badges
        .iter()
        .filter(|b| b.earned)
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(earned, ["Early Bird", "Social Butterfly"]);
}

#[test]
fn stored_level_zero_shows_as_level_one() {
    let doc = Gamification {
        level: 0,
        ..Gamification::default()
    };
    assert_eq!(awards(Some(&doc)).level, 1);
}

#[test]
fn document_without_level_defaults_to_first() {
    let doc: Gamification = serde_json::from_str(r#"{"points": 40}"#).unwrap();
    assert_eq!(doc.level, 1);
    assert!(doc.badges.is_empty());
}
