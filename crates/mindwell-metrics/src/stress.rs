//! Stress-period inputs and the local fallback forecast.
//!
//! The stress predictor sends the schedule and recent low-mood check-ins
//! to the model. When the model call fails for any reason, the forecast
//! comes from [`heuristic_forecast`] instead.

use jiff::civil::Date;
use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindwell_core::models::mood::MoodLog;
use mindwell_core::models::schedule::{ScheduleItem, ScheduleKind};

use crate::calendar::{SECONDS_PER_DAY, local_date};

/// Check-ins at or below this rating count as past stress.
pub const STRESS_RATING_THRESHOLD: u8 = 4;
pub const MAX_STRESS_PATTERNS: usize = 10;
pub const MAX_FORECAST: usize = 3;
pub const LOOKAHEAD_DAYS: i64 = 7;

pub const NO_STRESS_DETECTED: &str =
    "No high-stress periods detected based on your current schedule and mood patterns.";
pub const SCHEDULE_MANAGEABLE: &str =
    "Your schedule looks manageable! Keep maintaining good study habits.";

/// A predicted high-stress period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StressPeriod {
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    pub name: String,
    pub due_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub name: String,
    pub date: Timestamp,
}

/// The schedule as the model sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub assignments: Vec<Deadline>,
    pub events: Vec<ScheduledEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressPattern {
    pub date: Timestamp,
    pub rating: u8,
}

/// Split schedule items into deadlines (assignments and exams) and events.
pub fn schedule_input(items: &[ScheduleItem]) -> ScheduleInput {
    let mut input = ScheduleInput::default();
    for item in items {
        match item.kind {
            ScheduleKind::Assignment | ScheduleKind::Exam => input.assignments.push(Deadline {
                name: item.title.clone(),
                due_date: item.date,
            }),
            ScheduleKind::Event => input.events.push(ScheduledEvent {
                name: item.title.clone(),
                date: item.date,
            }),
        }
    }
    input
}

/// The first low-mood check-ins, in the order the store returned them.
pub fn past_stress_patterns(logs: &[MoodLog]) -> Vec<StressPattern> {
    logs.iter()
        .filter(|l| l.rating <= STRESS_RATING_THRESHOLD)
        .take(MAX_STRESS_PATTERNS)
        .map(|l| StressPattern {
            date: l.timestamp,
            rating: l.rating,
        })
        .collect()
}

/// Forecast built from the schedule alone.
///
/// Flags local days with more than one deadline, in the order each day's
/// first deadline appears in `items`, then each deadline due
/// within the next week. An empty forecast becomes a single reassurance
/// entry dated now. At most [`MAX_FORECAST`] entries are returned.
pub fn heuristic_forecast(items: &[ScheduleItem], now: &Zoned) -> Vec<StressPeriod> {
    let tz = now.time_zone();
    let deadlines: Vec<&ScheduleItem> = items.iter().filter(|i| i.kind.is_deadline()).collect();

    let mut per_day: Vec<(Date, usize)> = Vec::new();
    for item in &deadlines {
        let day = local_date(item.date, tz);
        match per_day.iter_mut().find(|(d, _)| *d == day) {
            Some((_, count)) => *count += 1,
            None => per_day.push((day, 1)),
        }
    }

    let mut periods: Vec<StressPeriod> = per_day
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(date, count)| StressPeriod {
            date: date.to_string(),
            reason: format!(
                "Multiple assignments/exams due ({count} items) - consider spreading workload"
            ),
        })
        .collect();

    let now_secs = now.timestamp().as_second();
    let horizon = LOOKAHEAD_DAYS * SECONDS_PER_DAY;
    for item in &deadlines {
        let until_due = item.date.as_second() - now_secs;
        if until_due > 0 && until_due <= horizon {
            periods.push(StressPeriod {
                date: item.date.to_string(),
                reason: format!("Upcoming deadline: {} - start preparing early", item.title),
            });
        }
    }

    if periods.is_empty() {
        periods.push(StressPeriod {
            date: now.timestamp().to_string(),
            reason: SCHEDULE_MANAGEABLE.to_string(),
        });
    }

    periods.truncate(MAX_FORECAST);
    periods
}
