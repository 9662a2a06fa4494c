//! Hugging Face Inference API provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{build_messages, non_empty, LlmClient, Provider, ProviderConfig, ProviderError, WireMessage};
use super::{MAX_NEW_TOKENS, TEMPERATURE};
use crate::models::chat::Message;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2";
const TOP_P: f32 = 0.95;

#[derive(Debug, Serialize)]
struct HfRequest<'a> {
    inputs: Vec<WireMessage<'a>>,
    parameters: HfParameters,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct HfGeneration {
    generated_text: String,
}

pub struct HuggingFaceProvider {
    client: LlmClient,
    config: ProviderConfig,
}

impl HuggingFaceProvider {
    pub fn new(client: LlmClient, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

fn build_request<'a>(
    system_prompt: &'a str,
    history: &'a [Message],
    user_message: &'a str,
) -> HfRequest<'a> {
    HfRequest {
        inputs: build_messages(system_prompt, history, user_message),
        parameters: HfParameters {
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        },
    }
}

/// The API answers with a list of generations; only the first is used.
fn extract_text(generations: Vec<HfGeneration>) -> Result<String, ProviderError> {
    let first = generations
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Malformed("empty generation list".to_string()))?;
    non_empty(first.generated_text)
}

#[async_trait]
impl Provider for HuggingFaceProvider {
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
        let request = build_request(system_prompt, history, user_message);
        let generations: Vec<HfGeneration> = self.client.post_json(&self.config, &request).await?;
        extract_text(generations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::spawn_upstream;
    use serde_json::json;
    use std::time::Duration;

    fn provider(endpoint: &str) -> HuggingFaceProvider {
        HuggingFaceProvider::new(
            LlmClient::new(Duration::from_secs(5)).unwrap(),
            ProviderConfig::new("huggingface", endpoint, Some("hf-token".to_string())),
        )
    }

    #[test]
    fn test_request_payload_shape() {
        let history = vec![Message::user("hi"), Message::assistant("hello")];
        let value = serde_json::to_value(build_request("sys", &history, "skills?")).unwrap();
        assert_eq!(value["inputs"][0], json!({"role": "system", "content": "sys"}));
        assert_eq!(value["inputs"][3], json!({"role": "user", "content": "skills?"}));
        assert_eq!(value["parameters"]["max_new_tokens"], 500);
        assert!((value["parameters"]["top_p"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_empty_generation_list_is_malformed() {
        assert!(matches!(extract_text(vec![]), Err(ProviderError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_generate_reads_first_generation() {
        let url = spawn_upstream(
            200,
            json!([{"generated_text": " I know Rust. "}, {"generated_text": "ignored"}]),
        )
        .await;
        let text = provider(&url).generate("sys", &[], "what?").await.unwrap();
        assert_eq!(text, "I know Rust.");
    }

    #[tokio::test]
    async fn test_generate_rejects_object_response() {
        let url = spawn_upstream(200, json!({"generated_text": "not a list"})).await;
        let err = provider(&url).generate("sys", &[], "what?").await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
