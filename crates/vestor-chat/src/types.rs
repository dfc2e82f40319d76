//! Message and session types for the conversational core.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::ConversationStore;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chat message. Immutable once created; owned by the
/// [`ConversationStore`] that holds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Creation time as epoch seconds.
    pub created_at: i64,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
            created_at: Local::now().timestamp(),
        }
    }
}

/// One interactive chat session and the history it exclusively owns.
///
/// Lives in memory for the duration of the process; nothing is persisted.
#[derive(Clone, Debug)]
pub struct ConversationSession {
    pub id: Uuid,
    pub started_at: i64,
    pub last_message_at: i64,
    /// Number of completed turns.
    pub message_count: u64,
    pub history: ConversationStore,
}

impl ConversationSession {
    /// Create a fresh session with an empty history.
    pub fn new() -> Self {
        let now = Local::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            last_message_at: now,
            message_count: 0,
            history: ConversationStore::new(),
        }
    }

    /// Whether the session has been idle longer than the given timeout.
    pub fn is_expired(&self, timeout_minutes: u32) -> bool {
        let now = Local::now().timestamp();
        let timeout_secs = i64::from(timeout_minutes) * 60;
        now - self.last_message_at > timeout_secs
    }

    /// Record a completed turn.
    pub fn touch(&mut self) {
        self.last_message_at = Local::now().timestamp();
        self.message_count += 1;
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only session overview for listings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: String,
    pub last_message_at: String,
    pub message_count: u64,
}

// =============================================================================
// Tests
// =============================================================================
