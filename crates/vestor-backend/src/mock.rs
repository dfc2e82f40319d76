//! Scriptable in-memory backend for tests.
//!
//! Stands in for the hosted model wherever a [`TextCompletion`] is
//! expected: scripted replies are served in order, then the configured
//! default behavior applies. Every prompt is recorded for inspection.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::BackendError;
use crate::TextCompletion;

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Failure,
}

/// In-memory [`TextCompletion`] with scripted behavior.
pub struct MockBackend {
    queue: Mutex<VecDeque<Scripted>>,
    default: Scripted,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    /// A backend that answers every call with `text`.
    pub fn replying(text: &str) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default: Scripted::Reply(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A backend that fails every call.
    pub fn failing() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default: Scripted::Failure,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a one-shot reply served before the default behavior.
    pub fn push_reply(&self, text: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Scripted::Reply(text.to_string()));
    }

    /// Queue a one-shot failure served before the default behavior.
    pub fn push_failure(&self) {
        self.queue.lock().unwrap().push_back(Scripted::Failure);
    }

    /// All prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextCompletion for MockBackend {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let scripted = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default.clone());

        match scripted {
            Scripted::Reply(text) => Ok(text),
            Scripted::Failure => Err(BackendError::Http(
                "simulated backend failure".to_string(),
            )),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
