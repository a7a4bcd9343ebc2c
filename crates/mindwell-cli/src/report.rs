//! Dashboard numbers derived from a snapshot.

use std::fmt::Write as _;

use jiff::Zoned;
use serde::Serialize;

use mindwell_metrics::awards::{Awards, awards};
use mindwell_metrics::habits::todays_status;
use mindwell_metrics::heatmap::{HabitHeatDay, MoodHeatDay, habit_heatmap, mood_heatmap};
use mindwell_metrics::mood::{WeeklyMood, weekly_mood};
use mindwell_metrics::progress::{goal_progress, overall_progress};
use mindwell_metrics::score::wellness_score;
use mindwell_metrics::streak::{HabitStats, habit_stats};

use crate::snapshot::Snapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRow {
    pub id: String,
    pub name: String,
    pub stats: HabitStats,
    pub completed_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRow {
    pub title: String,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub greeting_name: String,
    /// Across every habit log.
    pub overall: HabitStats,
    pub wellness_score: u8,
    pub overall_progress: u8,
    pub habits: Vec<HabitRow>,
    pub goals: Vec<GoalRow>,
    pub weekly_mood: Vec<WeeklyMood>,
    pub awards: Awards,
    pub habit_heatmap: Vec<HabitHeatDay>,
    pub mood_heatmap: Vec<MoodHeatDay>,
}

pub fn stats(snapshot: &Snapshot, now: &Zoned) -> Stats {
    let today = todays_status(&snapshot.habits, &snapshot.habit_logs, now);

    let habits = snapshot
        .habits
        .iter()
        .zip(today)
        .map(|(habit, status)| {
            let logs: Vec<_> = snapshot
                .habit_logs
                .iter()
                .filter(|l| l.habit_id == habit.id)
                .cloned()
                .collect();
            HabitRow {
                id: habit.id.clone(),
                name: habit.name.clone(),
                stats: habit_stats(&logs, now),
                completed_today: status.completed,
            }
        })
        .collect();

    let goals = snapshot
        .goals
        .iter()
        .map(|g| GoalRow {
            title: g.title.clone(),
            progress: goal_progress(&g.sub_tasks),
        })
        .collect();

    Stats {
        greeting_name: snapshot
            .session
            .as_ref()
            .map(|s| s.greeting_name().to_string())
            .unwrap_or_else(|| "there".to_string()),
        overall: habit_stats(&snapshot.habit_logs, now),
        wellness_score: wellness_score(&snapshot.mood_logs, &snapshot.habit_logs, now),
        overall_progress: overall_progress(&snapshot.goals),
        habits,
        goals,
        weekly_mood: weekly_mood(&snapshot.mood_logs, now),
        awards: awards(snapshot.gamification.as_ref()),
        habit_heatmap: habit_heatmap(&snapshot.habit_logs, now),
        mood_heatmap: mood_heatmap(&snapshot.mood_logs, now),
    }
}

/// Plain-text rendering for the terminal.
pub fn render(stats: &Stats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welcome back, {}!", stats.greeting_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Wellness score   {:>3}/100", stats.wellness_score);
    let _ = writeln!(out, "Current streak   {:>3} days", stats.overall.streak);
    let _ = writeln!(out, "Completion rate  {:>3}%", stats.overall.completion_rate);
    let _ = writeln!(out, "Goal progress    {:>3}%", stats.overall_progress);
    let _ = writeln!(
        out,
        "Points           {} (Level {})",
        stats.awards.points, stats.awards.level
    );
    let _ = writeln!(
        out,
        "Badges           {} of {}",
        stats.awards.earned, stats.awards.total
    );

    if !stats.habits.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Habits");
        for row in &stats.habits {
            let mark = if row.completed_today { "x" } else { " " };
            let _ = writeln!(
                out,
                "  [{mark}] {:<24} streak {:>3}  rate {:>3}%",
                row.name, row.stats.streak, row.stats.completion_rate
            );
        }
    }

    if !stats.goals.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Goals");
        for row in &stats.goals {
            let _ = writeln!(out, "  {:<28} {:>3}%", row.title, row.progress);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Mood this week");
    for day in &stats.weekly_mood {
        let bar = "#".repeat(day.mood.round().clamp(0.0, 10.0) as usize);
        let _ = writeln!(out, "  {:<4} {:<10} {:.1}", day.name, bar, day.mood);
    }

    out
}
