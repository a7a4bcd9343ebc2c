//! The hosted model behind every flow.

use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tracing::debug;

use mindwell_core::models::token_count::TokenCount;

use crate::error::FlowError;

/// One prompt: the system instructions plus the rendered user message.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub system_prompt: String,
    pub user_message: String,
}

#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub text: String,
    pub usage: TokenCount,
}

/// A text-in, text-out generative model.
pub trait GenerativeModel: Send + Sync {
    fn model_id(&self) -> &str;

    fn generate(
        &self,
        request: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, FlowError>> + Send;
}

/// A Claude model served through the Bedrock Converse API.
#[derive(Debug, Clone)]
pub struct BedrockModel {
    client: Client,
    model_id: String,
}

impl BedrockModel {
    /// `model_id` must be an inference profile ID such as
    /// `us.anthropic.claude-sonnet-4-20250514-v1:0`.
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), model_id)
    }

    pub fn from_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

impl GenerativeModel for BedrockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, FlowError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.user_message.clone()))
            .build()
            .map_err(|e| FlowError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(request.system_prompt.clone()))
            .messages(message)
            .send()
            .await
            .map_err(|e| FlowError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| FlowError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("");

        let usage = response
            .usage()
            .map(|u| TokenCount {
                input: u.input_tokens.max(0) as u64,
                output: u.output_tokens.max(0) as u64,
            })
            .unwrap_or_default();

        debug!(model = %self.model_id, text_len = text.len(), "model responded");

        Ok(ModelResponse { text, usage })
    }
}
