use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const FIRST_LEVEL: u32 = 1;

fn first_level() -> u32 {
    FIRST_LEVEL
}

/// Points, level and earned badges. One document per user, keyed by the
/// user id (see [`crate::paths::gamification`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Gamification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_profile_id: String,
    #[serde(default)]
    pub points: u64,
    #[serde(default = "first_level")]
    pub level: u32,
    /// Ids from [`BADGES`].
    #[serde(default)]
    pub badges: Vec<String>,
}

impl Default for Gamification {
    fn default() -> Self {
        Self {
            id: None,
            user_profile_id: String::new(),
            points: 0,
            level: FIRST_LEVEL,
            badges: Vec::new(),
        }
    }
}

impl Gamification {
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|b| b == badge_id)
    }
}

/// An achievement a student can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const BADGES: [Badge; 8] = [
    Badge {
        id: "badge-1",
        name: "Early Bird",
        description: "7 consecutive early wake-ups",
    },
    Badge {
        id: "badge-2",
        name: "Meditation Master",
        description: "30 days of meditation",
    },
    Badge {
        id: "badge-3",
        name: "Hydration Hero",
        description: "Perfect water intake for a week",
    },
    Badge {
        id: "badge-4",
        name: "Academic Ace",
        description: "Maintain study routine for a month",
    },
    Badge {
        id: "badge-5",
        name: "Stress Warrior",
        description: "Using coping tools during difficult times",
    },
    Badge {
        id: "badge-6",
        name: "Social Butterfly",
        description: "Connect with friends 3 times a week",
    },
    Badge {
        id: "badge-7",
        name: "Fitness Fanatic",
        description: "Complete 15 workouts in a month",
    },
    Badge {
        id: "badge-8",
        name: "Mindful Moment",
        description: "Log your mood for 14 days straight",
    },
];
