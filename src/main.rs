use anyhow::Context;
use axum::{
    http::{HeaderName, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

mod config;
mod data;
mod features;
mod handlers;
mod schema;
#[cfg(test)]
mod test_support;

use config::Config;
use data::repositories::{SqliteStore, StudyStore};
use features::ai_client::GenerativeClient;

#[derive(Clone)]
struct AppState {
    pub client: Arc<GenerativeClient>,
    pub store: Arc<dyn StudyStore>,
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-supabase-client-platform"),
            HeaderName::from_static("x-supabase-client-platform-version"),
            HeaderName::from_static("x-supabase-client-runtime"),
            HeaderName::from_static("x-supabase-client-runtime-version"),
        ])
}

fn build_router(state: AppState) -> Router {
    // Generation functions, callable cross-origin
    let functions_router = Router::new()
        .route(
            "/generate-study",
            post(handlers::study::generate_study).options(handlers::preflight),
        )
        .route(
            "/generate-schedule",
            post(handlers::schedule::generate_schedule).options(handlers::preflight),
        );

    // Persistence API
    let api_router = Router::new()
        .route("/schedules", post(handlers::schedule::save_schedule))
        .route("/schedules/{user_id}", get(handlers::schedule::list_schedules))
        .route("/quiz-scores", post(handlers::quiz::save_quiz_score));

    Router::new()
        .nest("/functions/v1", functions_router)
        .nest("/api", api_router)
        .layer(cors_layer())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let config = Config::from_env();

    // Database configuration
    let store = SqliteStore::connect(&config.database_url).context("Failed to create DB pool")?;
    store
        .run_migrations()
        .context("Failed to create database tables")?;

    let client = GenerativeClient::new(&config).context("Failed to create HTTP client")?;
    if !client.has_api_key() {
        log::warn!("AI_API_KEY is not set; study generation will fail and schedules use the fallback generator");
    }

    let app = build_router(AppState {
        client: Arc::new(client),
        store: Arc::new(store),
    });

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
