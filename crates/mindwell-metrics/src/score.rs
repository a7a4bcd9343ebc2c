//! Dashboard wellness score.
//!
//! A fixed heuristic, not a fitted model: start at 50, move 4 points per
//! point of average mood away from 5, add 2 per recent habit completion,
//! clamp to 0..=100.

use jiff::{Timestamp, Zoned};

use mindwell_core::models::habit::HabitLog;
use mindwell_core::models::mood::MoodLog;

use crate::calendar::elapsed_days;

pub const BASELINE: f64 = 50.0;
pub const MOOD_MIDPOINT: f64 = 5.0;
pub const MOOD_WEIGHT: f64 = 4.0;
pub const HABIT_WEIGHT: f64 = 2.0;
pub const WINDOW_DAYS: i64 = 7;

fn in_window(now: Timestamp, ts: Timestamp) -> bool {
    elapsed_days(now, ts) <= WINDOW_DAYS
}

pub fn wellness_score(mood_logs: &[MoodLog], habit_logs: &[HabitLog], now: &Zoned) -> u8 {
    let now = now.timestamp();
    let mut score = BASELINE;

    let recent_ratings: Vec<f64> = mood_logs
        .iter()
        .filter(|l| in_window(now, l.timestamp))
        .map(|l| f64::from(l.rating))
        .collect();
    if !recent_ratings.is_empty() {
        let average = recent_ratings.iter().sum::<f64>() / recent_ratings.len() as f64;
        score += (average - MOOD_MIDPOINT) * MOOD_WEIGHT;
    }

    let recent_habits = habit_logs
        .iter()
        .filter(|l| in_window(now, l.timestamp))
        .count();
    score += recent_habits as f64 * HABIT_WEIGHT;

    score.round().clamp(0.0, 100.0) as u8
}
