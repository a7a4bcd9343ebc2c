//! Habit streak and completion rate.
//!
//! A streak is the run of consecutive active days ending today or
//! yesterday. Not having logged anything yet today does not break it;
//! a full missed day does.

use std::collections::BTreeSet;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindwell_core::models::habit::HabitLog;

use crate::calendar::{days_between, local_date};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HabitStats {
    pub streak: u32,
    /// Share of days since the first active day that had any completion.
    pub completion_rate: u8,
}

/// Distinct local calendar days with at least one log, most recent first.
pub fn active_days<I>(timestamps: I, tz: &TimeZone) -> Vec<Date>
where
    I: IntoIterator<Item = Timestamp>,
{
    let days: BTreeSet<Date> = timestamps
        .into_iter()
        .map(|ts| local_date(ts, tz))
        .collect();
    days.into_iter().rev().collect()
}

/// Length of the streak ending at `days[0]`.
///
/// `days` must be distinct and sorted most recent first, as returned by
/// [`active_days`].
pub fn current_streak(days: &[Date], today: Date) -> u32 {
    let Some((&latest, rest)) = days.split_first() else {
        return 0;
    };
    if !matches!(days_between(today, latest), 0 | 1) {
        return 0;
    }

    let mut streak = 1;
    let mut anchor = latest;
    for &day in rest {
        if days_between(anchor, day) != 1 {
            break;
        }
        streak += 1;
        anchor = day;
    }
    streak
}

/// Active days divided by the days from the earliest active day through
/// today inclusive, as a rounded percentage capped at 100.
pub fn completion_rate(days: &[Date], today: Date) -> u8 {
    let Some(&first) = days.last() else {
        return 0;
    };
    let tracked = days_between(today, first) + 1;
    if tracked <= 0 {
        return 0;
    }
    let rate = (days.len() as f64 / tracked as f64 * 100.0).round();
    rate.min(100.0) as u8
}

/// Streak and completion rate for the habits page.
///
/// Once the streak has lapsed both numbers read 0, even though
/// [`completion_rate`] alone would still report the historical share.
pub fn habit_stats(logs: &[HabitLog], now: &Zoned) -> HabitStats {
    let days = active_days(logs.iter().map(|l| l.timestamp), now.time_zone());
    let today = now.date();
    let streak = current_streak(&days, today);
    if streak == 0 {
        return HabitStats::default();
    }
    HabitStats {
        streak,
        completion_rate: completion_rate(&days, today),
    }
}
