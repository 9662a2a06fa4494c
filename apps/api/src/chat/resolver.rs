//! Response resolver — picks the source of every chat answer.
//!
//! Order, short-circuiting on the first success:
//! 1. exact greeting token → fixed self-introduction, no provider call
//! 2. each available provider in priority order, bounded by the per-call deadline
//! 3. the keyword fallback responder, which cannot fail
//!
//! Provider failures are logged and absorbed here. Total time is bounded by
//! `providers × deadline`; the caller enforces the overall request timeout.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::chat::fallback::resolve_fallback;
use crate::chat::prompts::{is_greeting, SELF_INTRODUCTION};
use crate::llm_client::{Provider, ProviderError};
use crate::models::chat::Message;

/// Where a resolved answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSource {
    Greeting,
    Provider(String),
    Fallback,
}

impl fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseSource::Greeting => f.write_str("greeting"),
            ResponseSource::Provider(name) => write!(f, "provider:{name}"),
            ResponseSource::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub response: String,
    pub source: ResponseSource,
}

pub struct ResponseResolver {
    providers: Vec<Arc<dyn Provider>>,
    system_prompt: String,
    provider_deadline: Duration,
}

impl ResponseResolver {
    /// `system_prompt` already embeds the resume context; it is built once at startup.
    pub fn new(
        providers: Vec<Arc<dyn Provider>>,
        system_prompt: String,
        provider_deadline: Duration,
    ) -> Self {
        Self {
            providers,
            system_prompt,
            provider_deadline,
        }
    }

    pub fn available_providers(&self) -> Vec<&str> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect()
    }

    pub async fn resolve(&self, user_message: &str, history: &[Message]) -> Resolution {
        if is_greeting(user_message) {
            debug!("greeting token, answering with self-introduction");
            return Resolution {
                response: SELF_INTRODUCTION.to_string(),
                source: ResponseSource::Greeting,
            };
        }

        for provider in &self.providers {
            if !provider.is_available() {
                debug!(provider = provider.name(), "no credential, skipping provider");
                continue;
            }

            match self.call_provider(provider.as_ref(), history, user_message).await {
                Ok(response) => {
                    info!(provider = provider.name(), "provider answered");
                    return Resolution {
                        response,
                        source: ResponseSource::Provider(provider.name().to_string()),
                    };
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "provider failed, trying next");
                }
            }
        }

        info!("no provider answered, using fallback responder");
        Resolution {
            response: resolve_fallback(user_message).to_string(),
            source: ResponseSource::Fallback,
        }
    }

    async fn call_provider(
        &self,
        provider: &dyn Provider,
        history: &[Message],
        user_message: &str,
    ) -> Result<String, ProviderError> {
        let call = provider.generate(&self.system_prompt, history, user_message);
        tokio::time::timeout(self.provider_deadline, call)
            .await
            .map_err(|_| ProviderError::Timeout(self.provider_deadline))?
    }
}
