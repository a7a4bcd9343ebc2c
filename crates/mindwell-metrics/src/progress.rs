use mindwell_core::models::goal::{Goal, SubTask};

/// Percentage of completed sub-tasks, rounded. Empty lists are 0%.
pub fn goal_progress(sub_tasks: &[SubTask]) -> u8 {
    if sub_tasks.is_empty() {
        return 0;
    }
    let completed = sub_tasks.iter().filter(|t| t.completed).count();
    percent(completed as f64 / sub_tasks.len() as f64)
}

/// Mean of every goal's progress, rounded. No goals is 0%.
pub fn overall_progress(goals: &[Goal]) -> u8 {
    if goals.is_empty() {
        return 0;
    }
    let total: u32 = goals
        .iter()
        .map(|g| u32::from(goal_progress(&g.sub_tasks)))
        .sum();
    (f64::from(total) / goals.len() as f64).round() as u8
}

fn percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
