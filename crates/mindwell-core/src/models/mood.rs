use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lowest and highest rating accepted for a mood check-in.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MoodLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_profile_id: String,
    pub mood: MoodLabel,
    /// 1 (worst) to 10 (best).
    pub rating: u8,
    pub timestamp: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MoodLabel {
    Anxious,
    Stressed,
    Happy,
    Sad,
    Motivated,
    Calm,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Happy,
        MoodLabel::Calm,
        MoodLabel::Motivated,
        MoodLabel::Sad,
        MoodLabel::Stressed,
        MoodLabel::Anxious,
    ];

    /// Rating recorded when the user picks this mood from the check-in card.
    pub fn preset_rating(self) -> u8 {
        match self {
            MoodLabel::Happy => 9,
            MoodLabel::Calm => 8,
            MoodLabel::Motivated => 7,
            MoodLabel::Sad => 3,
            MoodLabel::Stressed => 2,
            MoodLabel::Anxious => 1,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodLabel::Happy => "😄",
            MoodLabel::Calm => "😌",
            MoodLabel::Motivated => "💪",
            MoodLabel::Sad => "😢",
            MoodLabel::Stressed => "😫",
            MoodLabel::Anxious => "😟",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::Anxious => "Anxious",
            MoodLabel::Stressed => "Stressed",
            MoodLabel::Happy => "Happy",
            MoodLabel::Sad => "Sad",
            MoodLabel::Motivated => "Motivated",
            MoodLabel::Calm => "Calm",
        }
    }
}
