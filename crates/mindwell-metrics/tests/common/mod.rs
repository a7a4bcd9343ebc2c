#![allow(dead_code)]

use jiff::civil::date;
use jiff::tz::{self, TimeZone};
use jiff::{Timestamp, ToSpan, Zoned};

use mindwell_core::models::goal::SubTask;
use mindwell_core::models::habit::HabitLog;
use mindwell_core::models::mood::{MoodLabel, MoodLog};
use mindwell_core::models::schedule::{ScheduleItem, ScheduleKind};

/// Fixed offset so tests never depend on the host's tz database.
pub fn local_tz() -> TimeZone {
    TimeZone::fixed(tz::offset(-5))
}

/// Monday 2026-10-19, 15:00 local.
pub fn now() -> Zoned {
    date(2026, 10, 19).at(15, 0, 0, 0).to_zoned(local_tz()).unwrap()
}

/// `hour`:00 local time, `days_ago` calendar days before today.
pub fn local(days_ago: i64, hour: i8) -> Timestamp {
    date(2026, 10, 19)
        .checked_sub(days_ago.days())
        .unwrap()
        .at(hour, 0, 0, 0)
        .to_zoned(local_tz())
        .unwrap()
        .timestamp()
}

pub fn habit_log(id: &str, habit_id: &str, timestamp: Timestamp) -> HabitLog {
    HabitLog {
        id: id.to_string(),
        habit_id: habit_id.to_string(),
        user_profile_id: "u1".to_string(),
        timestamp,
        notes: None,
    }
}

pub fn mood_log(rating: u8, timestamp: Timestamp) -> MoodLog {
    MoodLog {
        id: None,
        user_profile_id: "u1".to_string(),
        mood: MoodLabel::Calm,
        rating,
        timestamp,
    }
}

pub fn sub_tasks(completed: &[bool]) -> Vec<SubTask> {
    completed
        .iter()
        .enumerate()
        .map(|(i, done)| SubTask {
            id: format!("t{i}"),
            text: format!("task {i}"),
            completed: *done,
        })
        .collect()
}

pub fn schedule_item(title: &str, kind: ScheduleKind, date: Timestamp) -> ScheduleItem {
    ScheduleItem {
        id: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        date,
        kind,
        description: None,
        user_profile_id: "u1".to_string(),
    }
}
