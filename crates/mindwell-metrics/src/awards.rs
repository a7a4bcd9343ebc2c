//! Points, level and the badge collection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindwell_core::models::gamification::{BADGES, FIRST_LEVEL, Gamification};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BadgeStatus {
    pub id: String,
    pub name: String,
    pub description: String,
    pub earned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Awards {
    pub points: u64,
    pub level: u32,
    /// Length of the stored badge list.
    pub earned: usize,
    pub total: usize,
    pub badges: Vec<BadgeStatus>,
}

/// Summarize a gamification document. A user without one, or with a
/// level of 0, is shown at the first level with no points.
pub fn awards(gamification: Option<&Gamification>) -> Awards {
    let empty = Gamification::default();
    let g = gamification.unwrap_or(&empty);

    Awards {
        points: g.points,
        level: g.level.max(FIRST_LEVEL),
        earned: g.badges.len(),
        total: BADGES.len(),
        badges: BADGES
            .iter()
            .map(|b| BadgeStatus {
                id: b.id.to_string(),
                name: b.name.to_string(),
                description: b.description.to_string(),
                earned: g.has_badge(b.id),
            })
            .collect(),
    }
}
