mod common;

use mindwell_core::models::journal::{Sentiment, SentimentAnalysis};
use mindwell_flows::error::FlowError;
use mindwell_flows::flow::{Flow, run_flow};
use mindwell_flows::flows::insights::{InsightsInput, generate_personalized_insights};
use mindwell_flows::flows::sentiment::{
    AnalyzeJournalSentiment, SentimentInput, analyze_journal_sentiment,
};
use mindwell_flows::flows::wellness_tools::{WellnessToolsInput, suggest_wellness_tools};

use common::ScriptedModel;

#[tokio::test]
async fn sentiment_of_a_bad_day_is_negative() {
    let model = ScriptedModel::replying(
        r#"{"sentiment":"Negative","emoji":"😞","summary":"Disappointment after failing an exam."}"#,
    );

    let analysis = analyze_journal_sentiment(&model, "I failed my exam and feel terrible")
        .await
        .unwrap();

    assert_eq!(analysis.sentiment, Sentiment::Negative);
    assert!(!analysis.emoji.is_empty());
    assert!(!analysis.summary.is_empty());
    assert!(
        model
            .last_request()
            .user_message
            .contains("I failed my exam and feel terrible")
    );
}

#[tokio::test]
async fn reply_in_a_code_fence_is_accepted() {
    let model = ScriptedModel::replying(
        "Here you go:\n```json\n{\"sentiment\":\"Mixed\",\"emoji\":\"😐\",\"summary\":\"Busy but proud.\"}\n```",
    );

    let analysis = analyze_journal_sentiment(&model, "Long day, but I finished the lab.")
        .await
        .unwrap();

    assert_eq!(analysis.sentiment, Sentiment::Mixed);
}

#[tokio::test]
async fn unknown_sentiment_is_a_schema_violation() {
    let model = ScriptedModel::replying(r#"{"sentiment":"Ecstatic","emoji":"🤩","summary":"Great."}"#);

    let err = analyze_journal_sentiment(&model, "Aced it!").await.unwrap_err();

    assert!(matches!(err, FlowError::SchemaViolation(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_summary_is_a_schema_violation() {
    let model = ScriptedModel::replying(r#"{"sentiment":"Neutral","emoji":"🙂","summary":"  "}"#);

    let err = analyze_journal_sentiment(&model, "Nothing much happened.")
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::SchemaViolation(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_reply_is_a_parse_error() {
    let model = ScriptedModel::replying("   ");

    let err = analyze_journal_sentiment(&model, "Fine.").await.unwrap_err();

    assert!(matches!(err, FlowError::ResponseParse(_)), "got {err:?}");
}

#[tokio::test]
async fn blank_journal_entry_never_reaches_the_model() {
    let model = ScriptedModel::replying("{}");

    let err = analyze_journal_sentiment(&model, "\n").await.unwrap_err();

    assert!(matches!(err, FlowError::InvalidInput(_)));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn model_failure_surfaces_the_generic_notice() {
    let model = ScriptedModel::failing();

    let err = analyze_journal_sentiment(&model, "Tired.").await.unwrap_err();

    assert!(matches!(err, FlowError::Invocation(_)));
    let notice = err.notice();
    assert_eq!(notice.description, "Something went wrong. Please try again.");
}

#[tokio::test]
async fn flow_run_records_model_and_usage() {
    let model = ScriptedModel::replying(
        r#"{"sentiment":"Positive","emoji":"😊","summary":"A good run this morning."}"#,
    );
    let input = SentimentInput {
        journal_entry: "Went for a run before class.".to_string(),
    };

    let run = run_flow::<AnalyzeJournalSentiment, _>(&model, &input)
        .await
        .unwrap();

    assert_eq!(run.flow, AnalyzeJournalSentiment::NAME);
    assert_eq!(run.model_id, "scripted");
    assert_eq!(run.usage.total(), 160);
    assert_eq!(
        run.output,
        SentimentAnalysis {
            sentiment: Sentiment::Positive,
            emoji: "😊".to_string(),
            summary: "A good run this morning.".to_string(),
        }
    );
}

#[tokio::test]
async fn system_prompt_carries_the_output_shape() {
    let model = ScriptedModel::replying(
        r#"{"sentiment":"Neutral","emoji":"🙂","summary":"An ordinary day."}"#,
    );

    analyze_journal_sentiment(&model, "Lectures, lunch, library.")
        .await
        .unwrap();

    let request = model.last_request();
    assert!(request.system_prompt.contains("single JSON object"));
    assert!(request.system_prompt.contains(AnalyzeJournalSentiment::OUTPUT_SHAPE));
}

#[tokio::test]
async fn insights_must_be_an_html_list() {
    let input = InsightsInput::from_records(&[], &[], &[]).unwrap();
    assert_eq!(input.sleep_data, "[]");

    let model = ScriptedModel::replying(
        r#"{"insights":"<ul><li>Your mood dips on days you skip exercise.</li></ul>"}"#,
    );
    let output = generate_personalized_insights(&model, &input).await.unwrap();
    assert!(output.insights.starts_with("<ul>"));

    let model = ScriptedModel::replying(r#"{"insights":"Sleep more."}"#);
    let err = generate_personalized_insights(&model, &input)
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::SchemaViolation(_)));
}

#[tokio::test]
async fn wellness_tools_are_suggested_with_reasoning() {
    let model = ScriptedModel::replying(
        r#"{"suggestedTools":["Box breathing","Guided meditation"],"reasoning":"Both calm acute anxiety."}"#,
    );
    let input = WellnessToolsInput {
        mood: "anxious".to_string(),
        journal_entry: "Presentation tomorrow and I can't sleep.".to_string(),
        stress_triggers: "public speaking, deadlines".to_string(),
    };

    let output = suggest_wellness_tools(&model, &input).await.unwrap();

    assert_eq!(output.suggested_tools.len(), 2);
    let prompt = model.last_request().user_message;
    assert!(prompt.contains("Mood: anxious"));
    assert!(prompt.contains("public speaking, deadlines"));
}
