use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::validation::{
    not_blank, validate_clock_time, validate_hex_color, validate_time_order,
};
use crate::schema::study_plans;

const DEFAULT_COLOR: &str = "#3b82f6";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Which planner template the model is prompted with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleScope {
    #[default]
    Weekly,
    Daily,
}

/// Request body for the generate-schedule function
#[derive(Debug, Deserialize)]
pub struct GenerateScheduleRequest {
    pub prompt: Option<serde_json::Value>,
    #[serde(default)]
    pub scope: ScheduleScope,
}

/// One block in a weekly schedule. `day_of_week` is 0 for Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_time_order"))]
pub struct ScheduleEntry {
    #[validate(custom(function = "not_blank"))]
    pub topic: String,
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: i32,
    #[validate(custom(function = "validate_clock_time"))]
    pub start_time: String,
    #[validate(custom(function = "validate_clock_time"))]
    pub end_time: String,
    #[serde(default = "default_color")]
    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,
}

impl ScheduleEntry {
    pub fn new(topic: &str, day_of_week: i32, start_time: &str, end_time: &str, color: &str) -> Self {
        ScheduleEntry {
            topic: topic.to_string(),
            day_of_week,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            color: color.to_string(),
        }
    }
}

/// Shape shared by the model path and the fallback generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ScheduleResponse {
    #[validate(nested)]
    pub schedule: Vec<ScheduleEntry>,
}

/// Request payload for saving a generated schedule
#[derive(Debug, Deserialize, Validate)]
pub struct SaveScheduleRequest {
    #[validate(custom(function = "not_blank"))]
    pub user_id: String,
    #[validate(nested)]
    pub schedule: Vec<ScheduleEntry>,
    pub name: Option<String>,
}

/// A stored schedule row
#[derive(Debug, Queryable, Selectable, Serialize)]
#[diesel(table_name = study_plans)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudyPlan {
    pub id: i32,
    pub user_id: String,
    pub topic: String,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = study_plans)]
pub struct NewStudyPlan<'a> {
    pub user_id: &'a str,
    pub topic: String,
    pub day_of_week: i32,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub color: &'a str,
    pub created_at: NaiveDateTime,
}
