const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";
const DEFAULT_DATABASE_URL: &str = "study.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Runtime settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub gateway_url: String,
    pub model: String,
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Config {
            api_key: non_blank("AI_API_KEY"),
            gateway_url: non_blank("AI_GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.into()),
            model: non_blank("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            database_url: non_blank("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: non_blank("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        }
    }
}
