//! Conversation store — process-lifetime message history keyed by conversation id.
//!
//! Shared across requests behind a single async mutex. Bounded by `capacity` with
//! least-recently-used eviction, plus an optional idle TTL. An evicted or expired
//! conversation behaves exactly like one that was never seen.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::chat::{Message, Role};

/// Conversation id used when the client does not supply one.
pub const DEFAULT_CONVERSATION_ID: &str = "default";

#[derive(Debug)]
struct Conversation {
    messages: Vec<Message>,
    /// Logical clock value of the last access; smallest is evicted first.
    last_used: u64,
    last_active: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    conversations: HashMap<String, Conversation>,
    clock: u64,
}

#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<Mutex<Inner>>,
    capacity: usize,
    idle_ttl: Option<Duration>,
}

impl ConversationStore {
    /// `capacity` is clamped to at least 1. `idle_ttl = None` disables expiry.
    pub fn new(capacity: usize, idle_ttl: Option<Duration>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            capacity: capacity.max(1),
            idle_ttl,
        }
    }

    /// Returns a snapshot of the conversation, or an empty history if unseen.
    pub async fn get_history(&self, conversation_id: &str) -> Vec<Message> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();
        inner.purge_expired(now, self.idle_ttl);

        let tick = inner.tick();
        match inner.conversations.get_mut(conversation_id) {
            Some(conversation) => {
                conversation.last_used = tick;
                conversation.messages.clone()
            }
            None => Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub async fn append_message(&self, conversation_id: &str, role: Role, content: &str) {
        self.append(conversation_id, [Message::new(role, content)])
            .await;
    }

    /// Appends a completed user/assistant exchange under one lock acquisition,
    /// so concurrent turns on the same id never interleave.
    pub async fn append_turn(&self, conversation_id: &str, user: &str, assistant: &str) {
        self.append(
            conversation_id,
            [Message::user(user), Message::assistant(assistant)],
        )
        .await;
    }

    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.inner.lock().await.conversations.len()
    }

    async fn append<const N: usize>(&self, conversation_id: &str, messages: [Message; N]) {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();
        inner.purge_expired(now, self.idle_ttl);

        if !inner.conversations.contains_key(conversation_id) {
            while inner.conversations.len() >= self.capacity {
                inner.evict_lru();
            }
        }

        let tick = inner.tick();
        let conversation = inner
            .conversations
            .entry(conversation_id.to_string())
            .or_insert_with(|| Conversation {
                messages: Vec::new(),
                last_used: tick,
                last_active: now,
            });
        conversation.messages.extend(messages);
        conversation.last_used = tick;
        conversation.last_active = now;
    }

    #[cfg(test)]
    async fn purge_expired_at(&self, now: DateTime<Utc>) {
        self.inner.lock().await.purge_expired(now, self.idle_ttl);
    }
}

impl Inner {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_lru(&mut self) {
        let oldest = self
            .conversations
            .iter()
            .min_by_key(|(_, c)| c.last_used)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            debug!(conversation_id = %id, "evicting least recently used conversation");
            self.conversations.remove(&id);
        }
    }

    fn purge_expired(&mut self, now: DateTime<Utc>, idle_ttl: Option<Duration>) {
        let Some(ttl) = idle_ttl else {
            return;
        };
        let before = self.conversations.len();
        self.conversations
            .retain(|_, c| now.signed_duration_since(c.last_active) <= ttl);
        let expired = before - self.conversations.len();
        if expired > 0 {
            debug!(expired, "expired idle conversations");
        }
    }
}
