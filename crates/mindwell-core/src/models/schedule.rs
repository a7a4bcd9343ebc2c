use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScheduleItem {
    pub id: String,
    pub title: String,
    pub date: jiff::Timestamp,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user_profile_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScheduleKind {
    Assignment,
    Exam,
    Event,
}

impl ScheduleKind {
    /// Assignments and exams both carry a deadline; events do not.
    pub fn is_deadline(self) -> bool {
        matches!(self, ScheduleKind::Assignment | ScheduleKind::Exam)
    }
}
