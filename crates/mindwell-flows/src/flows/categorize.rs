use serde::{Deserialize, Serialize};
use tracing::debug;

use mindwell_core::models::forum::ForumCategory;

use crate::error::FlowError;
use crate::flow::{Flow, run_flow};
use crate::model::GenerativeModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizeInput {
    pub post_title: String,
    pub post_content: String,
    pub available_forums: Vec<ForumCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizeOutput {
    pub forum_id: String,
}

pub struct CategorizePost;

impl Flow for CategorizePost {
    const NAME: &'static str = "categorize_post";

    const TEMPLATE: &'static str = "\
You are moderating a student support forum. Choose the single forum that best \
fits the new post below.

Post title: {{ postTitle }}
Post content:
{{ postContent }}

Available forums:
{{ availableForums | json_encode(pretty=true) | safe }}

Answer with the id of exactly one of the available forums.";

    const OUTPUT_SHAPE: &'static str = r#"{
  "forumId": string (the id of one available forum)
}"#;

    type Input = CategorizeInput;
    type Output = CategorizeOutput;

    fn check(input: &CategorizeInput, output: &CategorizeOutput) -> Result<(), String> {
        if input.available_forums.iter().any(|f| f.id == output.forum_id) {
            Ok(())
        } else {
            Err(format!("unknown forum id {:?}", output.forum_id))
        }
    }
}

/// Pick the forum for a new post. With one forum there is nothing to
/// choose and the model is not called.
pub async fn categorize_post<M: GenerativeModel>(
    model: &M,
    input: &CategorizeInput,
) -> Result<CategorizeOutput, FlowError> {
    match input.available_forums.as_slice() {
        [] => Err(FlowError::InvalidInput("no forums to choose from".to_string())),
        [only] => {
            debug!(forum_id = %only.id, "single forum, skipping model");
            Ok(CategorizeOutput {
                forum_id: only.id.clone(),
            })
        }
        _ => Ok(run_flow::<CategorizePost, M>(model, input).await?.output),
    }
}
