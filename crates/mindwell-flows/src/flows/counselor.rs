use serde::{Deserialize, Serialize};

use mindwell_core::models::chat::{ChatMessage, ChatRole};

use crate::error::FlowError;
use crate::flow::{Flow, run_flow};
use crate::model::GenerativeModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounselorInput {
    pub history: Vec<Turn>,
    pub message: String,
}

impl CounselorInput {
    /// Conversation so far, oldest first. Messages without a timestamp
    /// sort ahead of the rest.
    pub fn from_messages(messages: &[ChatMessage], message: impl Into<String>) -> Self {
        let mut sorted: Vec<&ChatMessage> = messages.iter().collect();
        sorted.sort_by_key(|m| m.timestamp);
        Self {
            history: sorted
                .into_iter()
                .map(|m| Turn {
                    role: m.role,
                    content: m.content.clone(),
                })
                .collect(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounselorOutput {
    pub response: String,
}

pub struct PersonalCounselor;

impl Flow for PersonalCounselor {
    const NAME: &'static str = "personal_counselor";

    const TEMPLATE: &'static str = "\
You are a warm, supportive personal counselor for a university student. \
Listen carefully, reflect what you hear, and offer gentle, practical \
suggestions. You are not a replacement for professional care. If the student \
mentions self-harm or a crisis, urge them to contact emergency services or a \
crisis line right away.
{% if history %}
Conversation so far:
{% for turn in history %}
**{{ turn.role }}**: {{ turn.content }}
{% endfor %}{% endif %}
Student's new message:
{{ message }}";

    const OUTPUT_SHAPE: &'static str = r#"{
  "response": string
}"#;

    type Input = CounselorInput;
    type Output = CounselorOutput;

    fn check(_input: &CounselorInput, output: &CounselorOutput) -> Result<(), String> {
        if output.response.trim().is_empty() {
            return Err("response is empty".to_string());
        }
        Ok(())
    }
}

pub async fn personal_counselor<M: GenerativeModel>(
    model: &M,
    input: &CounselorInput,
) -> Result<CounselorOutput, FlowError> {
    if input.message.trim().is_empty() {
        return Err(FlowError::InvalidInput("message is empty".to_string()));
    }
    Ok(run_flow::<PersonalCounselor, M>(model, input).await?.output)
}
