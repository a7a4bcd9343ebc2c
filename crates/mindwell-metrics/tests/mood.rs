mod common;

use common::{local, mood_log, now};
use jiff::civil::date;
use mindwell_metrics::mood::{daily_mood, mood_trend, weekly_mood};

#[test]
fn weekly_series_ends_today() {
    let logs = vec![
        mood_log(4, local(0, 9)),
        mood_log(8, local(0, 18)),
        mood_log(3, local(6, 9)),
    ];
    let week = weekly_mood(&logs, &now());
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].name, "Tue");
    assert_eq!(week[0].mood, 3.0);
    assert_eq!(week[6].name, "Mon");
    assert_eq!(week[6].mood, 6.0);
    assert_eq!(week[5].mood, 0.0);
}

#[test]
fn trend_keeps_gaps_empty() {
    let logs = vec![mood_log(7, local(29, 9)), mood_log(9, local(40, 9))];
    let trend = mood_trend(&logs, &now());
    assert_eq!(trend.len(), 30);
    assert_eq!(trend[0].date, date(2026, 9, 20));
    assert_eq!(trend[0].average, Some(7.0));
    assert!(trend[1..].iter().all(|d| d.average.is_none()));
}

#[test]
fn daily_series_of_zero_days_is_empty() {
    assert!(daily_mood(&[], &now(), 0).is_empty());
}
