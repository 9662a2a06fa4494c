/// LLM Client — the single point of entry for all outbound text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// Every provider is a `Provider` strategy built on the shared `LlmClient` transport.
///
/// One invocation = exactly one HTTP request. Retrying and falling back across
/// providers is the resolver's job, not this module's.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::chat::{Message, Role};

pub mod huggingface;
pub mod prompts;
pub mod together;

/// Token budget for a single generated answer.
pub const MAX_NEW_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider '{provider}' has no credential configured")]
    MissingCredential { provider: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Malformed(String),

    #[error("provider returned empty content")]
    EmptyContent,

    #[error("provider call exceeded deadline of {0:?}")]
    Timeout(Duration),
}

/// Static description of one provider endpoint.
///
/// A provider is available iff its credential is present and non-blank.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: String,
    pub endpoint: String,
    pub credential: Option<String>,
}

impl ProviderConfig {
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        credential: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            credential: credential.filter(|c| !c.trim().is_empty()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.credential.is_some()
    }
}

/// The capability every text-generation backend exposes to the resolver.
///
/// Implementations build their own request payload and extract text from their own
/// response shape. An unexpected shape is an error, never a guessed answer.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    fn is_available(&self) -> bool;

    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Message],
        user_message: &str,
    ) -> Result<String, ProviderError>;
}

/// Role/content pair as sent over the wire by chat-style providers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Builds the ordered prompt: system prompt, then history, then the new user message.
pub fn build_messages<'a>(
    system_prompt: &'a str,
    history: &'a [Message],
    user_message: &'a str,
) -> Vec<WireMessage<'a>> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(WireMessage {
        role: Role::System.as_str(),
        content: system_prompt,
    });
    messages.extend(history.iter().map(|m| WireMessage {
        role: m.role.as_str(),
        content: &m.content,
    }));
    messages.push(WireMessage {
        role: Role::User.as_str(),
        content: user_message,
    });
    messages
}

/// Shared HTTP transport for all providers.
/// Wraps a pooled `reqwest::Client` and enforces the per-call deadline.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    deadline: Duration,
}

impl LlmClient {
    pub fn new(deadline: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().timeout(deadline).build()?,
            deadline,
        })
    }

    /// Sends one bearer-authenticated JSON POST and deserializes the body as `T`.
    ///
    /// Fails on: missing credential, transport error, non-2xx status,
    /// unparseable body, or the deadline elapsing.
    pub async fn post_json<B, T>(&self, config: &ProviderConfig, body: &B) -> Result<T, ProviderError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let credential =
            config
                .credential
                .as_deref()
                .ok_or_else(|| ProviderError::MissingCredential {
                    provider: config.name.clone(),
                })?;

        let call = async {
            let response = self
                .client
                .post(&config.endpoint)
                .bearer_auth(credential)
                .header("content-type", "application/json")
                .json(body)
                .send()
                .await?;

            let status = response.status();
            let text = response.text().await?;

            if !status.is_success() {
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: extract_error_message(&text),
                });
            }

            debug!(
                provider = %config.name,
                status = status.as_u16(),
                bytes = text.len(),
                "provider call succeeded"
            );

            let parsed: T = serde_json::from_str(&text)?;
            Ok::<T, ProviderError>(parsed)
        };

        tokio::time::timeout(self.deadline, call)
            .await
            .map_err(|_| ProviderError::Timeout(self.deadline))?
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Text(String),
    Object { message: String },
}

/// Pulls a readable message out of an error body, falling back to the raw text.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: ErrorDetail::Text(message),
        })
        | Ok(ErrorBody {
            error: ErrorDetail::Object { message },
        }) => message,
        Err(_) => body.trim().to_string(),
    }
}

/// Assembles the enabled providers in priority order: Hugging Face, then Together.
pub fn build_providers(
    client: &LlmClient,
    huggingface: ProviderConfig,
    together: ProviderConfig,
    together_model: String,
) -> Vec<Arc<dyn Provider>> {
    vec![
        Arc::new(huggingface::HuggingFaceProvider::new(client.clone(), huggingface)),
        Arc::new(together::TogetherProvider::new(
            client.clone(),
            together,
            together_model,
        )),
    ]
}

/// Rejects whitespace-only generations.
pub(crate) fn non_empty(text: String) -> Result<String, ProviderError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ProviderError::EmptyContent)
    } else {
        Ok(trimmed.to_string())
    }
}
