//! Stress-period prediction with a local fallback.

use jiff::Zoned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mindwell_core::models::mood::MoodLog;
use mindwell_core::models::schedule::ScheduleItem;
use mindwell_metrics::stress::{
    NO_STRESS_DETECTED, StressPeriod, heuristic_forecast, past_stress_patterns, schedule_input,
};

use crate::error::FlowError;
use crate::flow::{Flow, run_flow};
use crate::model::GenerativeModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressInput {
    /// JSON of `{ assignments, events }`.
    pub schedule: String,
    /// JSON of `[{ date, rating }]`.
    pub past_stress_patterns: String,
}

impl StressInput {
    pub fn from_records(items: &[ScheduleItem], mood_logs: &[MoodLog]) -> Result<Self, FlowError> {
        Ok(Self {
            schedule: serde_json::to_string(&schedule_input(items))?,
            past_stress_patterns: serde_json::to_string(&past_stress_patterns(mood_logs))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressOutput {
    /// JSON-encoded `[{ date, reason }]`.
    pub predicted_stress_periods: String,
}

impl StressOutput {
    /// Decode the inner list.
    ///
    /// Valid JSON that is not an array reads as no periods. Text that is
    /// empty or not JSON at all is a schema violation.
    pub fn periods(&self) -> Result<Vec<StressPeriod>, FlowError> {
        if self.predicted_stress_periods.trim().is_empty() {
            return Err(FlowError::SchemaViolation(
                "predictedStressPeriods is empty".to_string(),
            ));
        }
        let value: serde_json::Value = serde_json::from_str(&self.predicted_stress_periods)
            .map_err(|e| {
                FlowError::SchemaViolation(format!("predictedStressPeriods is not JSON: {e}"))
            })?;
        if !value.is_array() {
            return Ok(Vec::new());
        }
        serde_json::from_value(value).map_err(|e| {
            FlowError::SchemaViolation(format!("predictedStressPeriods is not a period list: {e}"))
        })
    }
}

pub struct PredictStressPeriods;

impl Flow for PredictStressPeriods {
    const NAME: &'static str = "predict_stress_periods";

    const TEMPLATE: &'static str = "\
You are an AI assistant that helps students anticipate periods of high stress.

Upcoming schedule (assignments, exams and events):
{{ schedule }}

Past low-mood check-ins (date and rating out of 10):
{{ pastStressPatterns }}

Identify the dates or date ranges likely to be stressful, such as several \
deadlines close together or a pattern that matches earlier low moods. For \
each one give the date and a short reason.

Set predictedStressPeriods to a JSON-encoded string holding an array of \
objects with \"date\" and \"reason\" keys.";

    const OUTPUT_SHAPE: &'static str = r#"{
  "predictedStressPeriods": string (JSON array of {"date": string, "reason": string})
}"#;

    type Input = StressInput;
    type Output = StressOutput;

    fn check(_input: &StressInput, output: &StressOutput) -> Result<(), String> {
        output.periods().map(|_| ()).map_err(|e| e.to_string())
    }
}

pub async fn predict_stress_periods<M: GenerativeModel>(
    model: &M,
    input: &StressInput,
) -> Result<StressOutput, FlowError> {
    Ok(run_flow::<PredictStressPeriods, M>(model, input).await?.output)
}

/// Where a forecast came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastSource {
    Model,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressForecast {
    pub periods: Vec<StressPeriod>,
    pub source: ForecastSource,
}

/// Predict stress periods, falling back to [`heuristic_forecast`] on any
/// failure. Never fails.
///
/// A model that answers with an empty list gets a single
/// "no high-stress periods" entry dated `now`.
pub async fn forecast_stress<M: GenerativeModel>(
    model: &M,
    items: &[ScheduleItem],
    mood_logs: &[MoodLog],
    now: &Zoned,
) -> StressForecast {
    match model_forecast(model, items, mood_logs, now).await {
        Ok(periods) => StressForecast {
            periods,
            source: ForecastSource::Model,
        },
        Err(e) => {
            warn!(error = %e, "stress prediction failed, using schedule heuristic");
            let periods = heuristic_forecast(items, now);
            info!(count = periods.len(), "heuristic forecast ready");
            StressForecast {
                periods,
                source: ForecastSource::Heuristic,
            }
        }
    }
}

async fn model_forecast<M: GenerativeModel>(
    model: &M,
    items: &[ScheduleItem],
    mood_logs: &[MoodLog],
    now: &Zoned,
) -> Result<Vec<StressPeriod>, FlowError> {
    let input = StressInput::from_records(items, mood_logs)?;
    let mut periods = predict_stress_periods(model, &input).await?.periods()?;
    if periods.is_empty() {
        periods.push(StressPeriod {
            date: now.timestamp().to_string(),
            reason: NO_STRESS_DETECTED.to_string(),
        });
    }
    Ok(periods)
}
