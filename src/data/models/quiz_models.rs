use chrono::NaiveDateTime;
use diesel::Insertable;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::validation::not_blank;
use crate::schema::quiz_scores;

/// One completed quiz attempt
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizScoreRecord {
    #[validate(custom(function = "not_blank"))]
    pub user_id: String,
    #[validate(custom(function = "not_blank"))]
    pub topic: String,
    #[validate(range(min = 0))]
    pub score: i32,
    #[validate(range(min = 1))]
    pub total_questions: i32,
}

#[derive(Insertable)]
#[diesel(table_name = quiz_scores)]
pub struct NewQuizScore<'a> {
    pub user_id: &'a str,
    pub topic: &'a str,
    pub score: i32,
    pub total_questions: i32,
    pub created_at: NaiveDateTime,
}

/// Standard API response format
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}
