//! Inference error types.
//!
//! Every failure the story and image flows can hit is one of these values.
//! Call sites turn them into displayable results; none of them escape to the
//! UI as a panic or a raw transport error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// Missing credential, unknown label or other bad configuration.
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    /// Provider answered with a retryable status (503 while the model loads)
    /// and the retry policy gave up.
    #[error("model is still loading (HTTP {status}): {body}")]
    ModelLoading { status: u16, body: String },

    /// Non-success, non-retryable HTTP response.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// HTTP 200 whose body could not be decoded as the expected payload.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// The request never produced an HTTP response.
    #[error("connection failed to {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },
}

impl InferenceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            InferenceError::ModelLoading { status, .. }
            | InferenceError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, InferenceError::ModelLoading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_http_errors() {
        let err = InferenceError::HttpError {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn test_model_loading_is_transient() {
        let err = InferenceError::ModelLoading {
            status: 503,
            body: "{\"error\":\"loading\"}".into(),
        };
        assert!(err.is_transient());
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_status_none_without_response() {
        let err = InferenceError::ConnectionFailed {
            endpoint: "http://localhost".into(),
            reason: "refused".into(),
        };
        assert!(err.status().is_none());
    }
}
