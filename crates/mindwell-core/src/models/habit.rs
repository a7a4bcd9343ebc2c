use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: HabitCategory,
    pub goal: String,
    pub user_profile_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HabitCategory {
    Physical,
    Mental,
    Academic,
}

/// One habit-completion event.
///
/// Never edited once written. Deleting the log is how a habit gets
/// "uncompleted" for the current day.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HabitLog {
    pub id: String,
    pub habit_id: String,
    pub user_profile_id: String,
    pub timestamp: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
