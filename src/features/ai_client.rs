use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::models::AppError;
use crate::features::prompts::ChatPrompt;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

/// Client for an OpenAI-style chat-completions gateway. The API key is
/// captured once at construction.
pub struct GenerativeClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GenerativeClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(GenerativeClient {
            http: Client::builder().build()?,
            endpoint: config.gateway_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one prompt and returns the raw text of the first choice.
    pub async fn complete(&self, prompt: &ChatPrompt) -> Result<String, AppError> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &prompt.system {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.user.clone(),
        });

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: prompt.temperature,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(AppError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => AppError::QuotaExceeded,
                _ => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    AppError::Upstream {
                        status: status.as_u16(),
                        body,
                    }
                }
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(AppError::Transport)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AppError::EmptyContent)
    }
}
