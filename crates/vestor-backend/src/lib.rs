//! Hosted text-generation backend for Vestor.
//!
//! Defines the [`TextCompletion`] capability consumed by the chat pipeline,
//! the Gemini HTTP implementation, and a scriptable mock for tests.

pub mod error;
pub mod gemini;
pub mod mock;

pub use error::BackendError;
pub use gemini::GeminiClient;
pub use mock::MockBackend;

use async_trait::async_trait;

/// The opaque text-completion capability.
///
/// Given a prompt, produce the model's text output or fail. Callers treat
/// every failure mode identically; the error carries detail for logs only.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Run one completion. Single attempt, no retry at this layer.
    async fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}
