//! Conversational core for Vestor.
//!
//! Implements the intent-gating and response-orchestration pipeline: each
//! incoming message is answered with a canned greeting, refused as
//! out-of-domain, or forwarded to the hosted generation backend, and the
//! turn is recorded in the session's conversation history.

pub mod classifier;
pub mod error;
pub mod generator;
pub mod greeting;
pub mod orchestrator;
pub mod store;
pub mod types;

pub use classifier::IntentClassifier;
pub use error::ChatError;
pub use generator::{ReplyGenerator, FALLBACK_REPLY};
pub use greeting::is_greeting;
pub use orchestrator::{ChatOrchestrator, GREETING_REPLY, OUT_OF_DOMAIN_REPLY};
pub use store::ConversationStore;
pub use types::{ConversationSession, Message, Role, SessionSummary};
