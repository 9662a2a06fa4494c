//! Together.ai inference provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{build_messages, non_empty, LlmClient, Provider, ProviderConfig, ProviderError, WireMessage};
use super::{MAX_NEW_TOKENS, TEMPERATURE};
use crate::models::chat::Message;

pub const DEFAULT_ENDPOINT: &str = "https://api.together.xyz/inference";
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.1";

#[derive(Debug, Serialize)]
struct TogetherRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct TogetherResponse {
    output: TogetherOutput,
}

#[derive(Debug, Deserialize)]
struct TogetherOutput {
    choices: Vec<TogetherChoice>,
}

#[derive(Debug, Deserialize)]
struct TogetherChoice {
    text: String,
}

pub struct TogetherProvider {
    client: LlmClient,
    config: ProviderConfig,
    model: String,
}

impl TogetherProvider {
    pub fn new(client: LlmClient, config: ProviderConfig, model: String) -> Self {
        Self {
            client,
            config,
            model,
        }
    }
}

fn extract_text(response: TogetherResponse) -> Result<String, ProviderError> {
    let choice = response
        .output
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Malformed("no choices in output".to_string()))?;
    non_empty(choice.text)
}

#[async_trait]
impl Provider for TogetherProvider {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn is_available(&self) -> bool {
        self.config.is_available()
    }

    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Message],
        user_message: &str,
    ) -> Result<String, ProviderError> {
        let request = TogetherRequest {
            model: &self.model,
            messages: build_messages(system_prompt, history, user_message),
            max_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
        };
        let response: TogetherResponse = self.client.post_json(&self.config, &request).await?;
        extract_text(response)
    }
}
