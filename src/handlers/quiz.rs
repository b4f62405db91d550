use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    AppState,
    data::models::{ApiResponse, AppError, QuizScoreRecord},
};

pub async fn save_quiz_score(
    State(state): State<AppState>,
    payload: Result<Json<QuizScoreRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    let Json(record) = payload?;
    record.validate()?;

    state.store.insert_quiz_score(&record).map_err(|e| {
        log::error!("Failed to save quiz score for {}: {}", record.user_id, e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            success: true,
            message: "Quiz score saved!".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::test_support::memory_store;
    use crate::tests::{app_with, app_with_store, send_json};
    use axum::http::StatusCode;
    use serde_json::json;

    const PATH: &str = "/api/quiz-scores";

    #[tokio::test]
    async fn test_score_is_saved() {
        let app = app_with("http://127.0.0.1:9/unused", None);
        let payload = json!({ "user_id": "user-1", "topic": "Photosynthesis", "score": 4, "total_questions": 5 });

        let (status, body) = send_json(app, PATH, payload).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Quiz score saved!");
    }

    #[tokio::test]
    async fn test_invalid_scores_are_rejected() {
        let bad = [
            json!({ "user_id": "user-1", "topic": "Cells", "score": -1, "total_questions": 5 }),
            json!({ "user_id": "user-1", "topic": "Cells", "score": 0, "total_questions": 0 }),
            json!({ "user_id": " ", "topic": "Cells", "score": 1, "total_questions": 5 }),
            json!({ "user_id": "user-1", "topic": "Cells" }),
        ];
        for payload in bad {
            let app = app_with("http://127.0.0.1:9/unused", None);
            let (status, _) = send_json(app, PATH, payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let app = app_with_store("http://127.0.0.1:9/unused", None, memory_store(false));
        let payload = json!({ "user_id": "user-1", "topic": "Cells", "score": 3, "total_questions": 5 });

        let (status, body) = send_json(app, PATH, payload).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to save: "));
        assert!(message.contains("no such table"));
    }
}
