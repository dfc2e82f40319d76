//! Turn orchestrator: central coordinator wiring greeting detection,
//! intent classification, and reply generation.
//!
//! Routes each message through the gating chain, records the turn in the
//! session's history, and manages the in-memory session table.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use tokio::sync::Mutex;
use uuid::Uuid;

use vestor_backend::TextCompletion;
use vestor_core::config::ChatConfig;

use crate::classifier::IntentClassifier;
use crate::error::ChatError;
use crate::generator::ReplyGenerator;
use crate::greeting::is_greeting;
use crate::store::ConversationStore;
use crate::types::{ConversationSession, Message, SessionSummary};

/// Reply for messages containing a greeting.
pub const GREETING_REPLY: &str =
    "\u{1f44b} Hello! How can I help you with your investment questions today?";

/// Reply for questions classified as outside the investment domain.
pub const OUT_OF_DOMAIN_REPLY: &str = "\u{26a0}\u{fe0f} Please ask investment-related questions only.";

/// Central orchestrator that coordinates gating, generation, and sessions.
pub struct ChatOrchestrator {
    classifier: IntentClassifier,
    generator: ReplyGenerator,
    sessions: Mutex<HashMap<Uuid, ConversationSession>>,
    config: ChatConfig,
}

impl ChatOrchestrator {
    /// Create a new orchestrator over the given backend capability.
    pub fn new(backend: Arc<dyn TextCompletion>, config: ChatConfig) -> Self {
        Self {
            classifier: IntentClassifier::new(Arc::clone(&backend)),
            generator: ReplyGenerator::new(backend),
            sessions: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Run one turn against an explicit history.
    ///
    /// Strict branch order, short-circuiting at the first match:
    /// greeting, then out-of-domain refusal, then generation with the raw
    /// question (no history is included in the prompt). On success the
    /// history gains exactly one user and one assistant message; a
    /// validation error leaves it untouched.
    pub async fn handle_turn(
        &self,
        question: &str,
        history: &mut ConversationStore,
    ) -> Result<String, ChatError> {
        self.validate(question)?;

        history.push_user(question);

        let reply = if is_greeting(question) {
            GREETING_REPLY.to_string()
        } else if !self.classifier.check_investment_intent(question).await {
            OUT_OF_DOMAIN_REPLY.to_string()
        } else {
            self.generator.generate(question).await
        };

        history.push_assistant(&reply);
        Ok(reply)
    }

    /// Handle an incoming chat message within a session.
    ///
    /// Resolves (or creates) the session, runs the turn against its
    /// history, and returns the reply with the session ID. The session
    /// table lock is held for the whole turn, so turns never interleave
    /// on one history.
    pub async fn handle_message(
        &self,
        message: &str,
        session_id: Option<Uuid>,
    ) -> Result<(String, Uuid), ChatError> {
        // Reject before touching the session table so an invalid message
        // never creates a session.
        self.validate(message)?;

        let mut sessions = self.sessions.lock().await;
        let sid = Self::resolve_session(
            &mut sessions,
            session_id,
            self.config.session_timeout_minutes,
        );
        let session = match sessions.get_mut(&sid) {
            Some(session) => session,
            None => return Err(ChatError::SessionNotFound(sid)),
        };

        let reply = self.handle_turn(message, &mut session.history).await?;
        session.touch();
        tracing::debug!(session = %sid, turns = session.message_count, "Turn completed");
        Ok((reply, sid))
    }

    /// Get a session by ID.
    pub async fn get_session(&self, session_id: Uuid) -> Option<ConversationSession> {
        self.sessions.lock().await.get(&session_id).cloned()
    }

    /// List all active sessions as summaries.
    pub async fn list_sessions(&self) -> Vec<SessionSummary> {
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .map(|s| SessionSummary {
                id: s.id,
                started_at: format_epoch(s.started_at),
                last_message_at: format_epoch(s.last_message_at),
                message_count: s.message_count,
            })
            .collect()
    }

    /// Delete a session by ID.
    pub async fn delete_session(&self, session_id: Uuid) -> Result<(), ChatError> {
        let mut sessions = self.sessions.lock().await;
        if sessions.remove(&session_id).is_some() {
            Ok(())
        } else {
            Err(ChatError::SessionNotFound(session_id))
        }
    }

    /// Read-only copy of a session's message history for display.
    pub async fn history(&self, session_id: Uuid) -> Result<Vec<Message>, ChatError> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(&session_id)
            .map(|s| s.history.messages().to_vec())
            .ok_or(ChatError::SessionNotFound(session_id))
    }

    // -- Private helpers --

    /// Check a message against the pipeline's acceptance rules.
    fn validate(&self, question: &str) -> Result<(), ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }
        if question.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if question.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }
        Ok(())
    }

    /// Resolve or create a session ID, replacing expired sessions.
    fn resolve_session(
        sessions: &mut HashMap<Uuid, ConversationSession>,
        requested: Option<Uuid>,
        timeout_minutes: u32,
    ) -> Uuid {
        if let Some(sid) = requested {
            if let Some(session) = sessions.get(&sid) {
                if !session.is_expired(timeout_minutes) {
                    return sid;
                }
                // Session expired; remove and create new.
                sessions.remove(&sid);
            }
        }

        let session = ConversationSession::new();
        let sid = session.id;
        sessions.insert(sid, session);
        sid
    }
}

/// Format epoch seconds as an ISO 8601 string.
fn format_epoch(epoch: i64) -> String {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.to_rfc3339())
        .unwrap_or_else(|| epoch.to_string())
}

// =============================================================================
// Tests
// =============================================================================
