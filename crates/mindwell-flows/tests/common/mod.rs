#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use jiff::civil::date;
use jiff::tz::{self, TimeZone};
use jiff::{Timestamp, ToSpan, Zoned};

use mindwell_core::models::forum::ForumCategory;
use mindwell_core::models::token_count::TokenCount;
use mindwell_flows::error::FlowError;
use mindwell_flows::model::{GenerativeModel, ModelRequest, ModelResponse};

/// Replays canned replies in order and records every request.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, FlowError>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, FlowError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(FlowError::Invocation("service unavailable".to_string()))])
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> ModelRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl GenerativeModel for ScriptedModel {
    fn model_id(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, FlowError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FlowError::Invocation("script exhausted".to_string())))?;
        Ok(ModelResponse {
            text: reply,
            usage: TokenCount {
                input: 120,
                output: 40,
            },
        })
    }
}

pub fn local_tz() -> TimeZone {
    TimeZone::fixed(tz::offset(-5))
}

/// Monday 2026-10-19, 15:00 local.
pub fn now() -> Zoned {
    date(2026, 10, 19).at(15, 0, 0, 0).to_zoned(local_tz()).unwrap()
}

/// `hour`:00 local time, `days_ahead` calendar days after today.
pub fn ahead(days_ahead: i64, hour: i8) -> Timestamp {
    date(2026, 10, 19)
        .checked_add(days_ahead.days())
        .unwrap()
        .at(hour, 0, 0, 0)
        .to_zoned(local_tz())
        .unwrap()
        .timestamp()
}

pub fn forum(id: &str, name: &str) -> ForumCategory {
    ForumCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Talk about {name}"),
    }
}
