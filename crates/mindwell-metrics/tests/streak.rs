mod common;

use common::{habit_log, local, local_tz, now};
use jiff::civil::date;
use mindwell_core::models::habit::HabitLog;
use mindwell_metrics::streak::{active_days, completion_rate, current_streak, habit_stats};

fn logs_on(days_ago: &[i64]) -> Vec<HabitLog> {
    days_ago
        .iter()
        .enumerate()
        .map(|(i, d)| habit_log(&format!("l{i}"), "h1", local(*d, 9)))
        .collect()
}

#[test]
fn no_logs_means_no_streak_and_no_rate() {
    let stats = habit_stats(&[], &now());
    assert_eq!(stats.streak, 0);
    assert_eq!(stats.completion_rate, 0);
}

#[test]
fn single_log_today_is_a_one_day_streak() {
    assert_eq!(habit_stats(&logs_on(&[0]), &now()).streak, 1);
}

#[test]
fn single_log_yesterday_keeps_streak_alive() {
    assert_eq!(habit_stats(&logs_on(&[1]), &now()).streak, 1);
}

#[test]
fn two_day_gap_breaks_the_streak() {
    assert_eq!(habit_stats(&logs_on(&[2]), &now()).streak, 0);
    assert_eq!(habit_stats(&logs_on(&[2, 3, 4, 5, 6]), &now()).streak, 0);
}

#[test]
fn consecutive_days_ending_today_count() {
    assert_eq!(habit_stats(&logs_on(&[0, 1, 2]), &now()).streak, 3);
}

#[test]
fn history_before_a_gap_is_ignored() {
    let with_gap = logs_on(&[0, 1, 2, 5, 6, 7]);
    assert_eq!(habit_stats(&with_gap, &now()).streak, 3);
}

#[test]
fn streak_counts_back_from_yesterday() {
    assert_eq!(habit_stats(&logs_on(&[1, 2, 3]), &now()).streak, 3);
}

#[test]
fn several_logs_on_one_day_count_once() {
    let logs = vec![
        habit_log("a", "h1", local(0, 8)),
        habit_log("b", "h2", local(0, 20)),
        habit_log("c", "h1", local(1, 7)),
    ];
    let stats = habit_stats(&logs, &now());
    assert_eq!(stats.streak, 2);
    assert_eq!(stats.completion_rate, 100);
}

#[test]
fn days_are_bucketed_in_local_time() {
    // 02:00 UTC on the 20th is still the evening of the 19th locally.
    let ts: jiff::Timestamp = "2026-10-20T02:00:00Z".parse().unwrap();
    let days = active_days([ts], &local_tz());
    assert_eq!(days, vec![date(2026, 10, 19)]);
}

#[test]
fn active_days_are_most_recent_first() {
    let days = active_days([local(3, 9), local(0, 9), local(1, 9), local(0, 10)], &local_tz());
    assert_eq!(
        days,
        vec![date(2026, 10, 19), date(2026, 10, 18), date(2026, 10, 16)]
    );
}

#[test]
fn completion_rate_spans_first_active_day_through_today() {
    // Active on 3 of the 4 days from three days ago through today.
    assert_eq!(habit_stats(&logs_on(&[0, 1, 3]), &now()).completion_rate, 75);
}

#[test]
fn lapsed_streak_zeroes_the_completion_rate() {
    let stats = habit_stats(&logs_on(&[4, 5]), &now());
    assert_eq!(stats.streak, 0);
    assert_eq!(stats.completion_rate, 0);
}

#[test]
fn raw_completion_rate_still_sees_lapsed_history() {
    let days = active_days([local(4, 9), local(5, 9)], &local_tz());
    assert_eq!(completion_rate(&days, date(2026, 10, 19)), 33);
}

#[test]
fn future_dated_log_does_not_start_a_streak() {
    let today = date(2026, 10, 19);
    let days = vec![date(2026, 10, 21)];
    assert_eq!(current_streak(&days, today), 0);
    assert_eq!(completion_rate(&days, today), 0);
}
