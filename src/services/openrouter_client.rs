//! OpenRouter chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::ports::{CompletionClient, CompletionRequest};

/// Environment variable holding the bearer token.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const REFERER_HEADER: &str = "HTTP-Referer";
const TITLE_HEADER: &str = "X-Title";
const APP_TITLE: &str = "isoprompt";

/// Transport configuration for the completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionApiConfig {
    pub api_url: Url,
    pub timeout_secs: u64,
}

impl Default for CompletionApiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout_secs: 60,
        }
    }
}

/// HTTP transport for the OpenRouter completion API.
///
/// This client performs a single request per call. There is no retry layer;
/// a failed extraction is surfaced once and never repeated automatically.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Transport {
                message: format!("Failed to create HTTP client: {e}"),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the environment with default configuration.
    ///
    /// An unset key becomes the empty string; the remote side then rejects the
    /// request with its own auth error.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&CompletionApiConfig::default())
    }

    /// Create from the environment with custom configuration.
    pub fn from_env_with_config(config: &CompletionApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let body = ApiRequest {
            model: &request.model_id,
            messages: [
                ApiMessage { role: "system", content: &request.system },
                ApiMessage { role: "user", content: &request.instruction },
            ],
            response_format: ResponseFormat { kind: "json_object" },
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .header(REFERER_HEADER, APP_TITLE)
            .header(TITLE_HEADER, APP_TITLE)
            .json(&body)
            .send()
            .map_err(|e| AppError::Transport {
                message: format!("HTTP request failed: {e}"),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else {
                    format!("HTTP {} with no error details", status.as_u16())
                }
            });
            return Err(AppError::Transport { message, status: Some(status.as_u16()) });
        }

        let api_response: ApiResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::Transport {
                message: format!("Failed to parse response: {e}"),
                status: Some(status.as_u16()),
            })?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                AppError::MalformedResponse("no content generated in reply".to_string())
            })
    }
}
