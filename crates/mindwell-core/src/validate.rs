//! Required-field checks run before a form is submitted.
//!
//! Each check returns the first problem found so the form can surface a
//! single toast for it.

use crate::error::CoreError;
use crate::models::mood::{MAX_RATING, MIN_RATING};

fn required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(())
}

pub fn habit(name: &str, goal: &str) -> Result<(), CoreError> {
    required("name", name)?;
    required("goal", goal)
}

/// A goal needs a title. Blank sub-task lines are dropped by the form,
/// so they are not an error here.
pub fn goal(title: &str) -> Result<(), CoreError> {
    required("title", title)
}

pub fn schedule_item(title: &str, date: Option<jiff::Timestamp>) -> Result<(), CoreError> {
    required("title", title)?;
    if date.is_none() {
        return Err(CoreError::MissingField("date".to_string()));
    }
    Ok(())
}

pub fn journal_entry(content: &str) -> Result<(), CoreError> {
    required("content", content)
}

pub fn mood_rating(rating: u8) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::OutOfRange {
            field: "rating".to_string(),
            min: MIN_RATING.into(),
            max: MAX_RATING.into(),
            value: rating.into(),
        });
    }
    Ok(())
}

pub fn emergency_contact(name: &str, phone: &str) -> Result<(), CoreError> {
    required("name", name)?;
    required("phone", phone)
}

pub fn coping_strategy(text: &str) -> Result<(), CoreError> {
    required("text", text)
}

pub fn forum_post(title: &str, content: &str) -> Result<(), CoreError> {
    required("title", title)?;
    required("content", content)
}
