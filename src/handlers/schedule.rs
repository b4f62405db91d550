use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
};
use chrono::Local;
use validator::Validate;

use crate::{
    AppState,
    data::models::{
        ApiResponse, AppError, GenerateScheduleRequest, SaveScheduleRequest, ScheduleResponse,
        ScheduleScope, StudyPlan,
    },
    features::{
        ai_client::GenerativeClient, extract, fallback, prompts, schedule_check, validation,
    },
};

/// Turns a free-text prompt into a schedule. Only bad input is an error:
/// a missing key or any failure on the model path falls back to the
/// keyword-driven generator.
pub async fn generate_schedule(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScheduleRequest>, JsonRejection>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let Json(payload) = payload?;
    let prompt = validation::require_text(payload.prompt.as_ref(), "prompt")?;
    log::info!("Received schedule prompt: {}", prompt);

    if !state.client.has_api_key() {
        log::info!("No API key, using fallback schedule generation");
        return Ok(Json(fallback::generate_schedule(prompt)));
    }

    match request_schedule(&state.client, prompt, payload.scope).await {
        Ok(schedule) => Ok(Json(schedule)),
        Err(e) if e.is_recoverable() => {
            log::warn!("AI schedule generation failed, using fallback: {:?}", e);
            Ok(Json(fallback::generate_schedule(prompt)))
        }
        Err(e) => Err(e),
    }
}

async fn request_schedule(
    client: &GenerativeClient,
    prompt: &str,
    scope: ScheduleScope,
) -> Result<ScheduleResponse, AppError> {
    let content = client.complete(&prompts::schedule_prompt(prompt, scope)).await?;
    let schedule: ScheduleResponse = extract::extract(&content).map_err(|e| {
        log::error!("Unusable schedule from AI ({}): {}", e, content);
        e
    })?;

    for (a, b) in schedule_check::find_overlaps(&schedule.schedule) {
        log::warn!(
            "AI schedule entries overlap: '{}' and '{}' on day {}",
            schedule.schedule[a].topic,
            schedule.schedule[b].topic,
            schedule.schedule[a].day_of_week
        );
    }

    Ok(schedule)
}

fn default_schedule_name() -> String {
    format!("Schedule {}", Local::now().format("%Y-%m-%d %H:%M:%S"))
}

pub async fn save_schedule(
    State(state): State<AppState>,
    payload: Result<Json<SaveScheduleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    if payload.schedule.is_empty() {
        return Err(AppError::InvalidInput("Schedule has no entries".to_string()));
    }

    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(default_schedule_name);

    let inserted = state
        .store
        .insert_schedule_entries(&payload.user_id, &payload.schedule, Some(&name))
        .map_err(|e| {
            log::error!("Insert error: {}", e);
            AppError::from(e)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            success: true,
            message: format!("{} study sessions created!", inserted),
        }),
    ))
}

pub async fn list_schedules(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<StudyPlan>>, AppError> {
    let plans = state.store.list_schedule_entries(&user_id).map_err(|e| {
        log::error!("Failed to load schedules for {}: {}", user_id, e);
        AppError::Load(e)
    })?;
    Ok(Json(plans))
}
