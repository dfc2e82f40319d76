//! Append-only conversation history.

use serde::{Deserialize, Serialize};

use crate::types::{Message, Role};

/// Ordered, append-only log of the messages in one session.
///
/// Insertion order is chronological turn order. The only mutation surface
/// is appending; after every completed turn the log holds alternating
/// user/assistant pairs starting with a user message.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: &str) {
        self.messages.push(Message::new(Role::User, content));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: &str) {
        self.messages.push(Message::new(Role::Assistant, content));
    }

    /// The message sequence, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

// =============================================================================
// Tests
// =============================================================================
