pub mod quiz;
pub mod schedule;
pub mod study;

use axum::http::StatusCode;

/// CORS preflight; the cors layer adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
