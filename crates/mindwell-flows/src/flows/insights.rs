use serde::{Deserialize, Serialize};

use mindwell_core::models::goal::Goal;
use mindwell_core::models::habit::Habit;
use mindwell_core::models::mood::MoodLog;

use crate::error::FlowError;
use crate::flow::{Flow, run_flow};
use crate::model::GenerativeModel;

/// Mood check-ins included in the insights prompt.
pub const MAX_MOOD_LOGS: usize = 15;

/// Each field is a JSON-encoded history the model reads as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsInput {
    pub mood_data: String,
    pub habit_data: String,
    pub sleep_data: String,
    pub exercise_data: String,
    pub water_intake_data: String,
    pub goal_data: String,
}

impl InsightsInput {
    /// Build the input from what the tracker records. Sleep, exercise and
    /// water intake are not tracked yet and go in as empty lists.
    pub fn from_records(
        mood_logs: &[MoodLog],
        habits: &[Habit],
        goals: &[Goal],
    ) -> Result<Self, FlowError> {
        let recent_moods = &mood_logs[..mood_logs.len().min(MAX_MOOD_LOGS)];
        Ok(Self {
            mood_data: serde_json::to_string(recent_moods)?,
            habit_data: serde_json::to_string(habits)?,
            sleep_data: "[]".to_string(),
            exercise_data: "[]".to_string(),
            water_intake_data: "[]".to_string(),
            goal_data: serde_json::to_string(goals)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsOutput {
    /// An HTML unordered list, one recommendation per `<li>`.
    pub insights: String,
}

pub struct GeneratePersonalizedInsights;

impl Flow for GeneratePersonalizedInsights {
    const NAME: &'static str = "generate_personalized_insights";

    const TEMPLATE: &'static str = "\
You are a personal well-being assistant. Study the student's data below and \
give personalized insights and recommendations that support their mental \
health and overall well-being.

Mood data: {{ moodData }}
Habit data: {{ habitData }}
Sleep data: {{ sleepData }}
Exercise data: {{ exerciseData }}
Water intake data: {{ waterIntakeData }}
Current goals: {{ goalData }}

Focus on:
- patterns and correlations between mood, habits, sleep and the other factors
- specific changes to habits or routines that would lift mood and well-being
- mental wellness tools or techniques worth trying
- tailored advice that moves the student toward their goals

Write the insights as an HTML unordered list (<ul><li>...</li></ul>) with one \
point per list item.";

    const OUTPUT_SHAPE: &'static str = r#"{
  "insights": string (an HTML <ul> with one <li> per insight)
}"#;

    type Input = InsightsInput;
    type Output = InsightsOutput;

    fn check(_input: &InsightsInput, output: &InsightsOutput) -> Result<(), String> {
        let html = output.insights.to_ascii_lowercase();
        if !html.contains("<ul") || !html.contains("<li") {
            return Err("insights is not an HTML unordered list".to_string());
        }
        Ok(())
    }
}

pub async fn generate_personalized_insights<M: GenerativeModel>(
    model: &M,
    input: &InsightsInput,
) -> Result<InsightsOutput, FlowError> {
    Ok(run_flow::<GeneratePersonalizedInsights, M>(model, input).await?.output)
}
