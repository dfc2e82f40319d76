//! Investment-intent classification.
//!
//! Delegates the yes/no decision to the generation backend with a fixed
//! instructional prompt and parses the free-text answer.

use std::sync::Arc;

use vestor_backend::TextCompletion;

/// Backend-delegated binary classifier for investment-related questions.
pub struct IntentClassifier {
    backend: Arc<dyn TextCompletion>,
}

impl IntentClassifier {
    pub fn new(backend: Arc<dyn TextCompletion>) -> Self {
        Self { backend }
    }

    /// Whether the question concerns investments, finance, or financial
    /// planning.
    ///
    /// One backend call, no retry. The answer is accepted as "yes" when
    /// the substring `yes` occurs anywhere in the normalized response, so
    /// hedged answers ("yes, partially") count as yes. A backend failure
    /// also counts as yes: an unclassifiable question proceeds to
    /// generation rather than being refused.
    pub async fn check_investment_intent(&self, question: &str) -> bool {
        let prompt = format!(
            "Please answer with 'yes' or 'no' only. \
             Is the following question related to investments, finance, stocks, bonds, \
             mutual funds, or financial planning?\n\n\
             Question: \"{question}\""
        );

        match self.backend.complete(&prompt).await {
            Ok(answer) => answer.trim().to_lowercase().contains("yes"),
            Err(e) => {
                tracing::warn!(error = %e, "Intent classification failed, letting the question through");
                true
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
