//! Greeting detection.

/// Fixed greeting vocabulary, matched as substrings of the normalized text.
static GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Whether the text contains a greeting.
///
/// Normalizes by trimming and lowercasing, then checks substring
/// containment against the fixed vocabulary. A greeting anywhere in the
/// text matches, including mid-sentence.
pub fn is_greeting(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    GREETINGS.iter().any(|greet| normalized.contains(greet))
}

// =============================================================================
// Tests
// =============================================================================
