use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::flow::{Flow, run_flow};
use crate::model::GenerativeModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessToolsInput {
    /// Current mood, e.g. `anxious`.
    pub mood: String,
    pub journal_entry: String,
    /// Comma-separated stress triggers.
    pub stress_triggers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessToolsOutput {
    pub suggested_tools: Vec<String>,
    pub reasoning: String,
}

pub struct SuggestWellnessTools;

impl Flow for SuggestWellnessTools {
    const NAME: &'static str = "suggest_wellness_tools";

    const TEMPLATE: &'static str = "\
You are a mental wellness assistant. From the student's current mood, their \
most recent journal entry and their known stress triggers, suggest the mental \
wellness tools most likely to help, and explain why each one was chosen.

Mood: {{ mood }}
Journal entry: {{ journalEntry }}
Stress triggers: {{ stressTriggers }}

Suggest tools such as guided meditation sessions, breathing exercises, CBT \
techniques or anxiety grounding techniques, with a reason for each.";

    const OUTPUT_SHAPE: &'static str = r#"{
  "suggestedTools": [string, ...],
  "reasoning": string
}"#;

    type Input = WellnessToolsInput;
    type Output = WellnessToolsOutput;

    fn check(_input: &WellnessToolsInput, output: &WellnessToolsOutput) -> Result<(), String> {
        if output.suggested_tools.is_empty() {
            return Err("no tools suggested".to_string());
        }
        Ok(())
    }
}

pub async fn suggest_wellness_tools<M: GenerativeModel>(
    model: &M,
    input: &WellnessToolsInput,
) -> Result<WellnessToolsOutput, FlowError> {
    Ok(run_flow::<SuggestWellnessTools, M>(model, input).await?.output)
}
