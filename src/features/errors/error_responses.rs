use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::AppError;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            AppError::MissingApiKey
            | AppError::Upstream { .. }
            | AppError::Transport(_)
            | AppError::EmptyContent
            | AppError::MalformedResponse { .. }
            | AppError::SchemaViolation(_)
            | AppError::Persistence(_)
            | AppError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::MalformedResponse { raw, .. } => {
                log::error!("Unparsable model output: {}", raw)
            }
            AppError::Upstream { status: code, body } => {
                log::error!("AI gateway returned {}: {}", code, body)
            }
            _ if status.is_server_error() => log::error!("Request failed: {}", self),
            _ => {}
        }

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
