use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use validator::ValidationError;

use crate::data::models::{AppError, ScheduleEntry};

pub const MAX_TOPIC_CHARS: usize = 200;

lazy_static! {
    static ref CLOCK_TIME_RE: Regex = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
    static ref HEX_COLOR_RE: Regex = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

/// Accepts only a present, string-typed, non-blank value. `field` names the
/// input in the error message returned to the client.
pub fn require_text<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a str, AppError> {
    match value.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::InvalidInput(format!("Please provide a valid {}", field))),
    }
}

/// Trims and silently cuts the topic to its first 200 characters.
pub fn sanitize_topic(topic: &str) -> String {
    topic.trim().chars().take(MAX_TOPIC_CHARS).collect()
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    if CLOCK_TIME_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("clock_time"))
    }
}

pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}

// Zero-padded HH:MM compares correctly as text
pub fn validate_time_order(entry: &ScheduleEntry) -> Result<(), ValidationError> {
    let well_formed =
        CLOCK_TIME_RE.is_match(&entry.start_time) && CLOCK_TIME_RE.is_match(&entry.end_time);
    if well_formed && entry.start_time >= entry.end_time {
        return Err(ValidationError::new("start_not_before_end"));
    }
    Ok(())
}
