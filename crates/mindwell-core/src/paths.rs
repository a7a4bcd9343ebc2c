//! Document store path conventions.
//!
//! Pure string functions. Every collection lives under the owning user's
//! document, one collection per entity type.

/// A per-user collection in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Habits,
    HabitLogs,
    MoodLogs,
    Goals,
    JournalEntries,
    Schedule,
    EmergencyContacts,
    CopingStrategies,
    CounselorChats,
    UserProfile,
    Gamification,
}

impl Collection {
    pub fn segment(self) -> &'static str {
        match self {
            Collection::Habits => "habits",
            Collection::HabitLogs => "habit_logs",
            Collection::MoodLogs => "mood_logs",
            Collection::Goals => "goals",
            Collection::JournalEntries => "journal_entries",
            Collection::Schedule => "schedule",
            Collection::EmergencyContacts => "emergency_contacts",
            Collection::CopingStrategies => "coping_strategies",
            Collection::CounselorChats => "counselor_chats",
            Collection::UserProfile => "user_profile",
            Collection::Gamification => "gamification",
        }
    }
}

pub const USERS_PREFIX: &str = "users/";

pub fn user(user_id: &str) -> String {
    format!("users/{user_id}")
}

pub fn collection(user_id: &str, collection: Collection) -> String {
    format!("users/{user_id}/{}", collection.segment())
}

pub fn document(collection_path: &str, id: &str) -> String {
    format!("{collection_path}/{id}")
}

pub fn habits(user_id: &str) -> String {
    collection(user_id, Collection::Habits)
}

pub fn habit_logs(user_id: &str) -> String {
    collection(user_id, Collection::HabitLogs)
}

pub fn mood_logs(user_id: &str) -> String {
    collection(user_id, Collection::MoodLogs)
}

pub fn goals(user_id: &str) -> String {
    collection(user_id, Collection::Goals)
}

pub fn journal_entries(user_id: &str) -> String {
    collection(user_id, Collection::JournalEntries)
}

pub fn schedule(user_id: &str) -> String {
    collection(user_id, Collection::Schedule)
}

pub fn counselor_chats(user_id: &str) -> String {
    collection(user_id, Collection::CounselorChats)
}

/// Profile and gamification documents are keyed by the user id itself.
pub fn user_profile(user_id: &str) -> String {
    document(&collection(user_id, Collection::UserProfile), user_id)
}

pub fn gamification(user_id: &str) -> String {
    document(&collection(user_id, Collection::Gamification), user_id)
}
