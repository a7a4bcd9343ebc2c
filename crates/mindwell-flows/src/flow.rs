//! The flow contract: typed input, instruction template, typed output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use mindwell_core::models::token_count::TokenCount;

use crate::error::FlowError;
use crate::model::{GenerativeModel, ModelRequest};
use crate::prompt;

/// A named, schema-validated request/response operation.
pub trait Flow {
    /// Flow name, used for logging and as the template name.
    const NAME: &'static str;

    /// Tera template for the user message, rendered from `Input`.
    const TEMPLATE: &'static str;

    /// JSON shape the model must answer with, shown to the model verbatim.
    const OUTPUT_SHAPE: &'static str;

    type Input: Serialize;
    type Output: DeserializeOwned;

    /// Constraints the type system cannot express (non-empty strings,
    /// membership in a candidate list). Returns the reason on failure.
    fn check(_input: &Self::Input, _output: &Self::Output) -> Result<(), String> {
        Ok(())
    }
}

/// The result of one flow invocation.
#[derive(Debug, Clone)]
pub struct FlowRun<T> {
    pub id: Uuid,
    pub flow: &'static str,
    pub model_id: String,
    pub usage: TokenCount,
    pub output: T,
}

/// Render, invoke, parse, and check one flow.
pub async fn run_flow<F, M>(model: &M, input: &F::Input) -> Result<FlowRun<F::Output>, FlowError>
where
    F: Flow,
    M: GenerativeModel,
{
    let id = Uuid::new_v4();
    info!(run_id = %id, flow = F::NAME, model = model.model_id(), "starting flow");

    let request = ModelRequest {
        system_prompt: prompt::system_prompt(F::OUTPUT_SHAPE),
        user_message: prompt::render(F::NAME, F::TEMPLATE, input)?,
    };

    let response = model.generate(&request).await.inspect_err(|e| {
        warn!(run_id = %id, flow = F::NAME, error = %e, "model call failed");
    })?;

    let output = parse_output::<F>(input, &response.text).inspect_err(|e| {
        warn!(run_id = %id, flow = F::NAME, error = %e, "rejected model output");
    })?;

    info!(
        run_id = %id,
        flow = F::NAME,
        input_tokens = response.usage.input,
        output_tokens = response.usage.output,
        "flow complete"
    );

    Ok(FlowRun {
        id,
        flow: F::NAME,
        model_id: model.model_id().to_string(),
        usage: response.usage,
        output,
    })
}

/// Parse and check a raw model reply against `F`'s output schema.
pub fn parse_output<F: Flow>(input: &F::Input, text: &str) -> Result<F::Output, FlowError> {
    if text.trim().is_empty() {
        return Err(FlowError::ResponseParse(format!("{}: empty response", F::NAME)));
    }

    let output: F::Output = serde_json::from_str(prompt::extract_json(text)).map_err(|e| {
        FlowError::SchemaViolation(format!("{}: {e}. Response: {text}", F::NAME))
    })?;

    F::check(input, &output)
        .map_err(|reason| FlowError::SchemaViolation(format!("{}: {reason}", F::NAME)))?;

    Ok(output)
}
