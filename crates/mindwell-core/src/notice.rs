//! User-facing notifications.
//!
//! Every failure is scoped to a single user action and ends up as one of
//! these toasts. Nothing here is fatal and nothing is retried.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub variant: NoticeVariant,
    pub title: String,
    pub description: String,
}

pub const AI_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

impl Notice {
    fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            title: title.to_string(),
            description: description.into(),
        }
    }

    /// A form failed its required-field checks.
    pub fn validation(error: &CoreError) -> Self {
        let description = match error {
            CoreError::MissingField(field) => format!("Please fill in the {field} field."),
            other => other.to_string(),
        };
        Self::destructive("Missing information", description)
    }

    /// Map an auth provider error code to something a student can act on.
    /// Unknown codes pass the provider's own message through.
    pub fn auth(code: &str, provider_message: &str) -> Self {
        Self::destructive("Authentication Failed", auth_message(code, provider_message))
    }

    /// Any AI flow failure: network, model error, or schema mismatch.
    pub fn flow_failure() -> Self {
        Self::destructive("Error", AI_FAILURE_MESSAGE)
    }

    /// The stress predictor fell back to the local schedule heuristic.
    pub fn stress_fallback() -> Self {
        Self {
            variant: NoticeVariant::Default,
            title: "Basic Analysis Complete".to_string(),
            description: "Generated predictions based on your schedule (AI service unavailable)."
                .to_string(),
        }
    }

    pub fn signed_out() -> Self {
        Self::destructive("Error", "Please log in to use this feature.")
    }

    pub fn no_schedule() -> Self {
        Self::destructive(
            "No Schedule Data",
            "Please add some schedule items first to get predictions.",
        )
    }
}

pub fn auth_message(code: &str, provider_message: &str) -> String {
    match code {
        "auth/user-not-found" | "auth/wrong-password" => "Invalid email or password.".to_string(),
        "auth/email-already-in-use" => "An account with this email already exists.".to_string(),
        "auth/weak-password" => "The password is too weak.".to_string(),
        _ if provider_message.is_empty() => "An unknown error occurred.".to_string(),
        _ => provider_message.to_string(),
    }
}
