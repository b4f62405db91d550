use diesel::result::Error as DieselError;
use thiserror::Error;

// Storage failures, carrying the underlying message
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Database connection error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("{0}")]
    Database(#[from] DieselError),
}

// Everything a request can fail with
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("AI API key is not configured")]
    MissingApiKey,
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,
    #[error("AI usage limit reached. Please add credits to continue.")]
    QuotaExceeded,
    #[error("AI gateway error ({status})")]
    Upstream { status: u16, body: String },
    #[error("Failed to reach AI gateway: {0}")]
    Transport(reqwest::Error),
    #[error("No content received from AI")]
    EmptyContent,
    #[error("Failed to parse AI response: {source}")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("AI response has an unexpected shape: {0}")]
    SchemaViolation(String),
    #[error("Failed to save: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Failed to load: {0}")]
    Load(PersistenceError),
}

impl AppError {
    /// Everything except bad client input can be absorbed by the fallback schedule.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::InvalidInput(_))
    }
}
