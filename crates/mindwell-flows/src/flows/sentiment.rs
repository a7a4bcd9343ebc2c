use serde::{Deserialize, Serialize};

use mindwell_core::models::journal::SentimentAnalysis;

use crate::error::FlowError;
use crate::flow::{Flow, run_flow};
use crate::model::GenerativeModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentInput {
    pub journal_entry: String,
}

pub struct AnalyzeJournalSentiment;

impl Flow for AnalyzeJournalSentiment {
    const NAME: &'static str = "analyze_journal_sentiment";

    const TEMPLATE: &'static str = "\
You are an expert in sentiment analysis and emotional intelligence. Read the \
journal entry below, decide its overall sentiment, and summarize the key \
emotions and themes.

Journal entry:
{{ journalEntry }}

Classify the overall sentiment as Positive, Negative, Neutral, or Mixed. Pick \
one emoji that represents it, and write a concise summary (one or two \
sentences) of the main feelings or topics.";

    const OUTPUT_SHAPE: &'static str = r#"{
  "sentiment": "Positive" | "Negative" | "Neutral" | "Mixed",
  "emoji": string,
  "summary": string
}"#;

    type Input = SentimentInput;
    type Output = SentimentAnalysis;

    fn check(_input: &SentimentInput, output: &SentimentAnalysis) -> Result<(), String> {
        if output.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        if output.emoji.trim().is_empty() {
            return Err("emoji is empty".to_string());
        }
        Ok(())
    }
}

/// Classify the sentiment of one journal entry.
pub async fn analyze_journal_sentiment<M: GenerativeModel>(
    model: &M,
    journal_entry: &str,
) -> Result<SentimentAnalysis, FlowError> {
    if journal_entry.trim().is_empty() {
        return Err(FlowError::InvalidInput("journal entry is empty".to_string()));
    }
    let input = SentimentInput {
        journal_entry: journal_entry.to_string(),
    };
    Ok(run_flow::<AnalyzeJournalSentiment, M>(model, &input).await?.output)
}
