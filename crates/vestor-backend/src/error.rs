//! Error type for backend invocations.

use thiserror::Error;

/// Errors from the hosted generation backend.
///
/// Variants exist so logs can say what went wrong; consumers branch only
/// on success versus failure and apply their own fallback policy.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Http(String),
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::Http("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = BackendError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 429): quota exceeded");

        let err = BackendError::MalformedResponse("no candidates".to_string());
        assert_eq!(err.to_string(), "malformed response: no candidates");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = BackendError::MalformedResponse("empty body".to_string());
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("MalformedResponse"));
    }
}
