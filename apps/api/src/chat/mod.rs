// Chat pipeline: greeting shortcut, provider fallthrough, keyword fallback,
// and per-conversation history.
// All provider calls go through llm_client — no direct HTTP calls here.

pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod resolver;
pub mod store;
