use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::data::models::AppError;

lazy_static! {
    static ref JSON_FENCE_RE: Regex = Regex::new(r"```json\n?").unwrap();
    static ref PLAIN_FENCE_RE: Regex = Regex::new(r"```\n?").unwrap();
}

/// Removes every ```json and ``` marker, wherever it occurs, then trims.
pub fn strip_fences(raw: &str) -> String {
    let without_tagged = JSON_FENCE_RE.replace_all(raw, "");
    PLAIN_FENCE_RE
        .replace_all(&without_tagged, "")
        .trim()
        .to_string()
}

/// Syntactic stage: fence-stripped text must be strict JSON.
pub fn parse_json(raw: &str) -> Result<Value, AppError> {
    let cleaned = strip_fences(raw);
    serde_json::from_str(&cleaned).map_err(|source| AppError::MalformedResponse {
        raw: raw.to_string(),
        source,
    })
}

/// Schema stage: the parsed value must deserialize into `T` and pass its rules.
pub fn decode<T>(value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let decoded: T =
        serde_json::from_value(value).map_err(|e| AppError::SchemaViolation(e.to_string()))?;
    decoded
        .validate()
        .map_err(|e| AppError::SchemaViolation(e.to_string()))?;
    Ok(decoded)
}

pub fn extract<T>(raw: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    decode(parse_json(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{ScheduleResponse, StudyMaterials};
    use serde_json::json;

    const PAYLOAD: &str = r##"{"schedule": [{"topic": "Physics", "day_of_week": 1, "start_time": "06:00", "end_time": "08:30", "color": "#3b82f6"}]}"##;

    #[test]
    fn test_fence_invariance() {
        let tagged = format!("```json\n{}\n```", PAYLOAD);
        let untagged = format!("```\n{}\n```", PAYLOAD);
        let padded = format!("\n\n  {}  \n", PAYLOAD);

        let expected = parse_json(PAYLOAD).unwrap();
        assert_eq!(parse_json(&tagged).unwrap(), expected);
        assert_eq!(parse_json(&untagged).unwrap(), expected);
        assert_eq!(parse_json(&padded).unwrap(), expected);
    }

    #[test]
    fn test_fences_removed_anywhere() {
        let wrapped = format!("Here you go:```json{}```", "{\"a\": 1}");
        assert_eq!(strip_fences(&wrapped), "Here you go:{\"a\": 1}");
    }

    #[test]
    fn test_malformed_json_keeps_raw_text() {
        let raw = "```json\n{\"schedule\": [\n```";
        match parse_json(raw) {
            Err(AppError::MalformedResponse { raw: kept, .. }) => assert_eq!(kept, raw),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_prose_is_malformed_not_schema_violation() {
        let result = extract::<ScheduleResponse>("Sorry, I cannot help with that.");
        assert!(matches!(result, Err(AppError::MalformedResponse { .. })));
    }

    #[test]
    fn test_schedule_not_array_is_schema_violation() {
        let result = extract::<ScheduleResponse>(r#"{"schedule": "monday mornings"}"#);
        assert!(matches!(result, Err(AppError::SchemaViolation(_))));

        let missing = extract::<ScheduleResponse>(r#"{"plan": []}"#);
        assert!(matches!(missing, Err(AppError::SchemaViolation(_))));
    }

    #[test]
    fn test_entry_rules_are_schema_violations() {
        let value = json!({"schedule": [{
            "topic": "Physics", "day_of_week": 9,
            "start_time": "06:00", "end_time": "08:30"
        }]});
        assert!(matches!(
            decode::<ScheduleResponse>(value),
            Err(AppError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_missing_color_gets_default() {
        let value = json!({"schedule": [{
            "topic": "Physics", "day_of_week": 2,
            "start_time": "18:00", "end_time": "19:30"
        }]});
        let decoded: ScheduleResponse = decode(value).unwrap();
        assert_eq!(decoded.schedule[0].color, "#3b82f6");
    }

    #[test]
    fn test_quiz_correct_index_out_of_range() {
        let value = json!({
            "explanation": "Plants make food from light.",
            "flashcards": [],
            "quiz": [{
                "question": "What do plants need?",
                "options": ["A) Light", "B) Sand", "C) Salt", "D) Iron"],
                "correctIndex": 4,
                "explanation": "Light drives photosynthesis."
            }],
            "studyTips": []
        });
        assert!(matches!(
            decode::<StudyMaterials>(value),
            Err(AppError::SchemaViolation(_))
        ));
    }
}
