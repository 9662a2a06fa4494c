pub mod health;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Chat API
        .route("/api/chat", post(handlers::handle_chat))
        .route("/api/chat/health", get(handlers::handle_chat_health))
        .with_state(state)
}

/// CORS restricted to a fixed allow-list. Unparseable origins are skipped.
pub fn cors_layer(origins: &[&str]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::chat::fallback::{DEFAULT_RESPONSE, SKILLS_RESPONSE};
    use crate::chat::handlers::TIMEOUT_MESSAGE;
    use crate::chat::prompts::SELF_INTRODUCTION;
    use crate::chat::resolver::ResponseResolver;
    use crate::chat::store::ConversationStore;
    use crate::llm_client::{Provider, ProviderError};
    use crate::models::chat::Message;

    /// Answers after `delay` with a reply derived from the message.
    struct EchoProvider {
        delay: Duration,
    }

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn is_available(&self) -> bool {
            true
        }

        async fn generate(
            &self,
            _system_prompt: &str,
            _history: &[Message],
            user_message: &str,
        ) -> Result<String, ProviderError> {
            tokio::time::sleep(self.delay).await;
            Ok(format!("echo: {user_message}"))
        }
    }

    fn make_state(providers: Vec<Arc<dyn Provider>>, provider_deadline: Duration) -> AppState {
        AppState {
            resolver: Arc::new(ResponseResolver::new(
                providers,
                "SYSTEM".to_string(),
                provider_deadline,
            )),
            store: ConversationStore::new(100, None),
            chat_timeout: Duration::from_secs(30),
        }
    }

    fn fallback_state() -> AppState {
        make_state(Vec::new(), Duration::from_secs(30))
    }

    fn post_chat(body: Value) -> Request<Body> {
        Request::post("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let state = fallback_state();

        let (status, body) = send(&state, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) =
            send(&state, Request::get("/api/chat/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy", "message": "Chat API is running"}));

        let (status, body) = send(&state, Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected_without_mutation() {
        let state = fallback_state();

        for message in ["", "   \n\t"] {
            let (status, body) =
                send(&state, post_chat(json!({"message": message, "conversation_id": "c1"}))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }

        let (status, _) = send(&state, post_chat(json!({"conversation_id": "c1"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(state.store.len().await, 0);
    }

    #[tokio::test]
    async fn test_chat_uses_default_conversation_id() {
        let state = fallback_state();

        let (status, body) = send(&state, post_chat(json!({"message": "  what skills?  "}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["conversation_id"], "default");
        assert_eq!(body["status"], "success");
        assert_eq!(body["response"], SKILLS_RESPONSE);
        let history = state.store.get_history("default").await;
        assert_eq!(history[0], Message::user("what skills?"));
    }

    #[tokio::test]
    async fn test_blank_conversation_id_means_default() {
        let state = fallback_state();
        let (_, body) = send(
            &state,
            post_chat(json!({"message": "anything", "conversation_id": "  "})),
        )
        .await;
        assert_eq!(body["conversation_id"], "default");
        assert_eq!(body["response"], DEFAULT_RESPONSE);
    }

    #[tokio::test]
    async fn test_greeting_answered_without_providers() {
        let state = fallback_state();
        let (status, body) = send(&state, post_chat(json!({"message": "HLOO"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], SELF_INTRODUCTION);
    }

    #[tokio::test]
    async fn test_two_turns_recorded_in_order() {
        let provider: Arc<dyn Provider> = Arc::new(EchoProvider {
            delay: Duration::ZERO,
        });
        let state = make_state(vec![provider], Duration::from_secs(30));

        for message in ["first question", "second question"] {
            let (status, body) =
                send(&state, post_chat(json!({"message": message, "conversation_id": "abc"}))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["conversation_id"], "abc");
        }

        let history = state.store.get_history("abc").await;
        assert_eq!(
            history,
            vec![
                Message::user("first question"),
                Message::assistant("echo: first question"),
                Message::user("second question"),
                Message::assistant("echo: second question"),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_returns_504_and_records_nothing() {
        // Per-provider deadline longer than the overall chat timeout.
        let provider: Arc<dyn Provider> = Arc::new(EchoProvider {
            delay: Duration::from_secs(300),
        });
        let state = make_state(vec![provider], Duration::from_secs(600));

        let (status, body) = send(
            &state,
            post_chat(json!({"message": "slow question", "conversation_id": "t1"})),
        )
        .await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"]["code"], "TIMEOUT");
        assert_eq!(body["error"]["message"], TIMEOUT_MESSAGE);

        // Let the abandoned provider call's own delay elapse; history must stay empty.
        tokio::time::sleep(Duration::from_secs(400)).await;
        assert!(state.store.get_history("t1").await.is_empty());
        assert_eq!(state.store.len().await, 0);
    }

    #[tokio::test]
    async fn test_cors_allows_listed_origin_only() {
        let app = build_router(fallback_state()).layer(cors_layer(crate::config::CORS_ALLOWED_ORIGINS));

        let allowed = app
            .clone()
            .oneshot(
                Request::get("/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );

        let denied = app
            .oneshot(
                Request::get("/health")
                    .header("origin", "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(denied.headers().get("access-control-allow-origin").is_none());
    }
}
