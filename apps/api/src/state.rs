use std::sync::Arc;
use std::time::Duration;

use crate::chat::resolver::ResponseResolver;
use crate::chat::store::ConversationStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResponseResolver>,
    pub store: ConversationStore,
    /// Overall deadline for one chat request, covering every provider attempt.
    pub chat_timeout: Duration,
}
