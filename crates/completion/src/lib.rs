//! Groq chat-completion client.
//!
//! Implements [`domain::CompletionClient`] over Groq's OpenAI-compatible
//! `/chat/completions` endpoint using JSON mode.

use async_trait::async_trait;
use domain::{CompletionClient, CompletionRequest};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

#[derive(Error, Debug)]
pub enum GroqError {
    #[error("Request to Groq failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Groq returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Groq returned no completion content")]
    EmptyCompletion,
}

impl From<GroqError> for domain::Error {
    fn from(err: GroqError) -> Self {
        domain::Error::upstream_from(err)
    }
}

/// Long-lived handle; cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, request: &CompletionRequest) -> Result<String, GroqError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: &request.system,
                },
                Message {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GroqError::Status { status, body });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GroqError::EmptyCompletion)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete_json(&self, request: CompletionRequest) -> Result<String, domain::Error> {
        tracing::info!("Requesting completion from {}", self.model);
        Ok(self.chat(&request).await?)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
