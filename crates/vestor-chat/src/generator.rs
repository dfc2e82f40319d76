//! Reply generation.
//!
//! Forwards a prompt to the generation backend and normalizes the outcome
//! to displayable text: the trimmed model output, or a fixed apology when
//! the backend fails.

use std::sync::Arc;

use vestor_backend::TextCompletion;

/// Reply returned whenever the backend call fails.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request at the moment.";

/// Generates assistant replies via the hosted backend.
pub struct ReplyGenerator {
    backend: Arc<dyn TextCompletion>,
}

impl ReplyGenerator {
    pub fn new(backend: Arc<dyn TextCompletion>) -> Self {
        Self { backend }
    }

    /// Run one completion for `prompt`.
    ///
    /// One backend call, no retry. Never fails: a backend error produces
    /// [`FALLBACK_REPLY`], identical on every repeat.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.backend.complete(prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Generation failed, returning fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
