use mindwell_core::paths::{self, Collection};
use mindwell_core::session::Session;

#[test]
fn collections_are_scoped_per_user() {
    assert_eq!(paths::habit_logs("u1"), "users/u1/habit_logs");
    assert_eq!(paths::mood_logs("u1"), "users/u1/mood_logs");
    assert_eq!(paths::schedule("u1"), "users/u1/schedule");
    assert_eq!(
        paths::collection("u1", Collection::CopingStrategies),
        "users/u1/coping_strategies"
    );
}

#[test]
fn profile_documents_are_keyed_by_user_id() {
    assert_eq!(paths::user_profile("abc"), "users/abc/user_profile/abc");
    assert_eq!(paths::gamification("abc"), "users/abc/gamification/abc");
}

#[test]
fn session_builds_paths_for_signed_in_user() {
    let session = Session::new("student-7");
    assert_eq!(
        session.collection(Collection::Goals),
        "users/student-7/goals"
    );
    assert_eq!(
        session.document(Collection::HabitLogs, "log-1"),
        "users/student-7/habit_logs/log-1"
    );
}

#[test]
fn greeting_falls_back_when_name_is_blank() {
    let mut session = Session::new("u");
    assert_eq!(session.greeting_name(), "there");
    session.display_name = Some("  ".to_string());
    assert_eq!(session.greeting_name(), "there");
    session.display_name = Some("Ada".to_string());
    assert_eq!(session.greeting_name(), "Ada");
}
