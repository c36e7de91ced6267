use async_trait::async_trait;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// One system + user exchange sent to a chat-completion backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, new)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// Port for the external chat-completion API.
///
/// Implementations must ask the backend for a JSON-formatted reply and return
/// the raw assistant text. A single instance is shared by every request, so it
/// must be usable concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete_json(&self, request: CompletionRequest) -> Result<String, Error>;
}
