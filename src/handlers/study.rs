use axum::extract::{rejection::JsonRejection, Json, State};

use crate::{
    AppState,
    data::models::{AppError, GenerateStudyRequest, StudyMaterials},
    features::{extract, prompts, validation},
};

/// Generates explanation, flashcards, quiz and tips for a topic. Any failure
/// is returned to the caller; there is no fallback on this path.
pub async fn generate_study(
    State(state): State<AppState>,
    payload: Result<Json<GenerateStudyRequest>, JsonRejection>,
) -> Result<Json<StudyMaterials>, AppError> {
    let Json(payload) = payload?;
    let topic = validation::require_text(payload.topic.as_ref(), "topic")?;
    let topic = validation::sanitize_topic(topic);

    if !state.client.has_api_key() {
        return Err(AppError::MissingApiKey);
    }

    log::info!("Generating study materials for topic: {}", topic);
    let prompt = prompts::study_prompt(&topic, payload.request_id.as_deref());
    let content = state.client.complete(&prompt).await?;

    let materials: StudyMaterials = extract::extract(&content)?;

    for mismatch in materials.count_mismatches() {
        log::warn!("Study materials for '{}': {}", topic, mismatch);
    }

    Ok(Json(materials))
}
