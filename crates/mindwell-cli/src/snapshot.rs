//! A JSON export of one student's collections.
//!
//! Each field mirrors a per-user collection; missing collections read as
//! empty.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mindwell_core::models::chat::ChatMessage;
use mindwell_core::models::forum::ForumCategory;
use mindwell_core::models::gamification::Gamification;
use mindwell_core::models::goal::Goal;
use mindwell_core::models::habit::{Habit, HabitLog};
use mindwell_core::models::journal::JournalEntry;
use mindwell_core::models::mood::MoodLog;
use mindwell_core::models::safety::{CopingStrategy, EmergencyContact};
use mindwell_core::models::schedule::ScheduleItem;
use mindwell_core::session::Session;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub session: Option<Session>,
    pub habits: Vec<Habit>,
    pub habit_logs: Vec<HabitLog>,
    pub mood_logs: Vec<MoodLog>,
    pub goals: Vec<Goal>,
    pub journal_entries: Vec<JournalEntry>,
    pub schedule: Vec<ScheduleItem>,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub coping_strategies: Vec<CopingStrategy>,
    pub counselor_chats: Vec<ChatMessage>,
    pub forums: Vec<ForumCategory>,
    pub gamification: Option<Gamification>,
}

impl Snapshot {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read snapshot at {}: {e}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&contents)
            .map_err(|e| eyre::eyre!("invalid snapshot {}: {e}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            habits = snapshot.habits.len(),
            habit_logs = snapshot.habit_logs.len(),
            mood_logs = snapshot.mood_logs.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Most recent journal entry, if any.
    pub fn latest_journal_entry(&self) -> Option<&JournalEntry> {
        self.journal_entries.iter().max_by_key(|e| e.created_at)
    }
}
