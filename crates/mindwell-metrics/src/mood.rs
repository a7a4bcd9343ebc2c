use jiff::Zoned;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindwell_core::models::mood::MoodLog;

use crate::calendar::{days_before, local_date};

/// Average mood for one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyMood {
    #[ts(type = "string")]
    pub date: Date,
    /// `None` when nothing was logged that day.
    pub average: Option<f64>,
}

/// One bar of the dashboard's weekly chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklyMood {
    /// Short weekday name, e.g. `Mon`.
    pub name: String,
    /// Average rating, 0 for a day without check-ins.
    pub mood: f64,
}

/// Per-day average rating over the last `days` days, oldest first,
/// ending today.
pub fn daily_mood(logs: &[MoodLog], now: &Zoned, days: usize) -> Vec<DailyMood> {
    let tz = now.time_zone();
    let today = now.date();
    let dated: Vec<(Date, u8)> = logs
        .iter()
        .map(|l| (local_date(l.timestamp, tz), l.rating))
        .collect();

    let mut series: Vec<DailyMood> = (0..days as i64)
        .map(|offset| {
            let date = days_before(today, offset);
            let ratings: Vec<f64> = dated
                .iter()
                .filter(|(d, _)| *d == date)
                .map(|(_, r)| f64::from(*r))
                .collect();
            let average = if ratings.is_empty() {
                None
            } else {
                Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
            };
            DailyMood { date, average }
        })
        .collect();
    series.reverse();
    series
}

pub fn weekly_mood(logs: &[MoodLog], now: &Zoned) -> Vec<WeeklyMood> {
    daily_mood(logs, now, 7)
        .into_iter()
        .map(|d| WeeklyMood {
            name: d.date.strftime("%a").to_string(),
            mood: d.average.unwrap_or(0.0),
        })
        .collect()
}

/// Thirty-day trend. Gaps stay `None` so the chart can bridge them.
pub fn mood_trend(logs: &[MoodLog], now: &Zoned) -> Vec<DailyMood> {
    daily_mood(logs, now, 30)
}
