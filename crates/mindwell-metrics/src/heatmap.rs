//! Calendar heatmaps for the habits and mood pages.
//!
//! Both cover whole months: the current one and the three before it.

use jiff::civil::Date;
use jiff::{ToSpan, Zoned};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindwell_core::models::habit::HabitLog;
use mindwell_core::models::mood::{MoodLabel, MoodLog};

use crate::calendar::local_date;
use crate::habits::daily_counts;

pub const HEATMAP_MONTHS: i64 = 4;

/// Shading steps above zero. Counts past this share the darkest cell.
pub const MAX_INTENSITY: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HabitHeatDay {
    #[ts(type = "string")]
    pub date: Date,
    pub count: u32,
    /// 0 for an empty day, up to [`MAX_INTENSITY`].
    pub intensity: u8,
}

/// How a day's check-in is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MoodBand {
    Great,
    Good,
    Okay,
    Low,
    Poor,
}

impl MoodBand {
    pub fn for_rating(rating: u8) -> Self {
        match rating {
            9.. => MoodBand::Great,
            7..=8 => MoodBand::Good,
            5..=6 => MoodBand::Okay,
            3..=4 => MoodBand::Low,
            _ => MoodBand::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodHeatDay {
    #[ts(type = "string")]
    pub date: Date,
    pub mood: Option<MoodLabel>,
    pub rating: Option<u8>,
    pub band: Option<MoodBand>,
}

/// First and last day shown: the first of the month three months back
/// through the end of the current month.
pub fn heatmap_range(now: &Zoned) -> (Date, Date) {
    let this_month = now.date().first_of_month();
    let start = this_month.saturating_sub((HEATMAP_MONTHS - 1).months());
    (start, now.date().last_of_month())
}

fn days_in(range: (Date, Date)) -> impl Iterator<Item = Date> {
    let (start, end) = range;
    start.series(1.day()).take_while(move |d| *d <= end)
}

pub fn habit_heatmap(logs: &[HabitLog], now: &Zoned) -> Vec<HabitHeatDay> {
    let counts = daily_counts(logs, now.time_zone());
    days_in(heatmap_range(now))
        .map(|date| {
            let count = counts.get(&date).copied().unwrap_or(0);
            HabitHeatDay {
                date,
                count,
                intensity: count.min(MAX_INTENSITY) as u8,
            }
        })
        .collect()
}

/// One cell per day. A day with several check-ins shows the first one in
/// `logs` order.
pub fn mood_heatmap(logs: &[MoodLog], now: &Zoned) -> Vec<MoodHeatDay> {
    let tz = now.time_zone();
    days_in(heatmap_range(now))
        .map(|date| {
            let log = logs.iter().find(|l| local_date(l.timestamp, tz) == date);
            MoodHeatDay {
                date,
                mood: log.map(|l| l.mood),
                rating: log.map(|l| l.rating),
                band: log.map(|l| MoodBand::for_rating(l.rating)),
            }
        })
        .collect()
}
