//! Error types for REST API operations

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Network-level failure reported by the transport
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-200 status; carries the raw body for
    /// diagnostics
    #[error("remote error: status {status}: {body}")]
    Remote {
        /// HTTP status code returned by the server
        status: u16,
        /// Raw response body, verbatim
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The envelope is missing its "data" payload
    #[error("response is missing \"data\" payload")]
    MissingPayload,

    /// The envelope is missing the required "timestamp" field
    #[error("response is missing required \"timestamp\"")]
    MissingTimestamp,

    /// A timestamp was present but was not an integer of epoch milliseconds
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A required request parameter was empty; no request was made
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}

impl RestError {
    /// The HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the failure happened before any network call
    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::MissingParameter(_))
    }

    /// Returns true if retrying the same call could plausibly succeed.
    ///
    /// Advisory only: this client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Remote { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = RestError::Remote {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_retryable());

        assert_eq!(RestError::MissingPayload.status(), None);
    }

    #[test]
    fn test_retryable() {
        let err = RestError::Transport(TransportError::Timeout);
        assert!(err.is_retryable());

        let err = RestError::Remote {
            status: 503,
            body: String::new(),
        };
        assert!(err.is_retryable());

        assert!(!RestError::MissingParameter("interval").is_retryable());
    }

    #[test]
    fn test_client_side() {
        assert!(RestError::MissingParameter("exchange").is_client_side());
        assert!(!RestError::MissingTimestamp.is_client_side());
    }
}
