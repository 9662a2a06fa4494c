mod chat;
mod config;
mod context;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::resolver::ResponseResolver;
use crate::chat::store::ConversationStore;
use crate::config::{Config, CORS_ALLOWED_ORIGINS};
use crate::context::{data::RESUME, format_resume_context};
use crate::llm_client::{build_providers, prompts::build_system_prompt, LlmClient};
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values, never on missing credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio Chat API v{}", env!("CARGO_PKG_VERSION"));

    // Resume context is rendered once and embedded in the system prompt
    let resume_context = format_resume_context(&RESUME);
    let system_prompt = build_system_prompt(&RESUME, &resume_context);
    info!("Resume context loaded ({} chars)", resume_context.len());

    // Initialize provider chain
    let llm = LlmClient::new(config.provider_timeout)?;
    let providers = build_providers(
        &llm,
        config.huggingface.clone(),
        config.together.clone(),
        config.together_model.clone(),
    );
    let resolver = ResponseResolver::new(providers, system_prompt, config.provider_timeout);
    let available = resolver.available_providers();
    if available.is_empty() {
        info!("No provider credentials configured; answering from fallback responder only");
    } else {
        info!("Providers enabled (in priority order): {}", available.join(", "));
    }

    let store = ConversationStore::new(config.conversation_capacity, config.conversation_ttl);
    info!(
        "Conversation store: capacity {}, idle ttl {:?}",
        config.conversation_capacity, config.conversation_ttl
    );

    // Build app state
    let state = AppState {
        resolver: Arc::new(resolver),
        store,
        chat_timeout: config.chat_timeout,
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(CORS_ALLOWED_ORIGINS)),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
