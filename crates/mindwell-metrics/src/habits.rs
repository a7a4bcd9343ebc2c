use std::collections::BTreeMap;

use jiff::Zoned;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindwell_core::models::habit::{Habit, HabitLog};

use crate::calendar::local_date;

/// Whether a habit has been ticked off today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HabitDayStatus {
    pub habit_id: String,
    pub completed: bool,
    /// The log to delete to untick the habit.
    pub log_id: Option<String>,
}

pub fn todays_status(habits: &[Habit], logs: &[HabitLog], now: &Zoned) -> Vec<HabitDayStatus> {
    let tz = now.time_zone();
    let today = now.date();
    let todays_logs: Vec<&HabitLog> = logs
        .iter()
        .filter(|l| local_date(l.timestamp, tz) == today)
        .collect();

    habits
        .iter()
        .map(|habit| {
            let log = todays_logs.iter().find(|l| l.habit_id == habit.id);
            HabitDayStatus {
                habit_id: habit.id.clone(),
                completed: log.is_some(),
                log_id: log.map(|l| l.id.clone()),
            }
        })
        .collect()
}

/// Completions per local calendar day. Every log counts, so two habits
/// ticked off on one day count as 2.
pub fn daily_counts(logs: &[HabitLog], tz: &TimeZone) -> BTreeMap<Date, u32> {
    let mut counts = BTreeMap::new();
    for log in logs {
        *counts.entry(local_date(log.timestamp, tz)).or_insert(0) += 1;
    }
    counts
}
