pub mod ai_client;
pub mod errors;
pub mod extract;
pub mod fallback;
pub mod prompts;
pub mod schedule_check;
pub mod validation;
