use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user goal broken into sub-tasks.
///
/// Progress is deliberately absent: it is derived from `sub_tasks` every
/// time it is shown and never written back to the store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: GoalCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub sub_tasks: Vec<SubTask>,
    pub user_profile_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GoalCategory {
    Academic,
    Fitness,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    Personal,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubTask {
    pub id: String,
    pub text: String,
    pub completed: bool,
}
