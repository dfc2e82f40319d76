//! Error types for the conversational core.

/// Errors from the chat pipeline.
///
/// Backend failures never appear here: the classifier and generator absorb
/// them into fallback values before a turn completes.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
}
