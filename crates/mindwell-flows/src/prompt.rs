//! Prompt rendering and response extraction.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::FlowError;

/// Render a flow's instruction template with its input.
///
/// The input's serialized fields become the template variables, so a
/// template refers to them by their JSON names (`{{ journalEntry }}`).
pub fn render<T: Serialize>(name: &str, template: &str, input: &T) -> Result<String, FlowError> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, template)?;

    let value = serde_json::to_value(input)?;
    let context = Context::from_value(value)?;

    Ok(tera.render(name, &context)?)
}

/// System prompt pinning the response to one JSON object of `shape`.
pub fn system_prompt(shape: &str) -> String {
    format!(
        "Respond with a single JSON object and nothing else. \
         Do not wrap it in Markdown or add commentary. \
         The object must have exactly this shape:\n{shape}"
    )
}

/// The JSON object inside a model reply.
///
/// Tolerates a surrounding Markdown code fence or stray prose by slicing
/// from the first `{` to the last `}`. Returns the trimmed text unchanged
/// when no braces are present.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}
