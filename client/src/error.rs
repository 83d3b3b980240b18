//! Station Data Client error types.

use reqwest::StatusCode;
use std::error::Error as StdError;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Coarse classification callers act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Timeout or connection level failure, the API may just be unreachable.
    Communication,
    /// Anything else: error status, malformed or unexpected payload.
    General,
}

/// Errors that can occur when talking to the allertameteo API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request did not complete in time
    #[error("timeout error fetching information from {url}")]
    Timeout {
        url: String,
        #[source]
        source: BoxError,
    },

    /// Connection, DNS or socket failure
    #[error("error fetching information from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be built or followed
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// API returned an error status
    #[error("API error {status} from {url}")]
    Status {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    /// Response body is not JSON
    #[error("invalid JSON from {url}: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Response is JSON but not shaped as expected
    #[error("unexpected payload from {url}: {source}")]
    UnexpectedPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Timeout { .. } | ClientError::Transport { .. } => {
                ErrorKind::Communication
            }
            ClientError::Request { .. }
            | ClientError::Status { .. }
            | ClientError::InvalidJson { .. }
            | ClientError::UnexpectedPayload { .. } => ErrorKind::General,
        }
    }

    pub fn is_communication(&self) -> bool {
        self.kind() == ErrorKind::Communication
    }

    pub fn url(&self) -> &str {
        match self {
            ClientError::Timeout { url, .. }
            | ClientError::Transport { url, .. }
            | ClientError::Request { url, .. }
            | ClientError::Status { url, .. }
            | ClientError::InvalidJson { url, .. }
            | ClientError::UnexpectedPayload { url, .. } => url,
        }
    }

    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            return ClientError::Timeout {
                url,
                source: Box::new(source),
            };
        }
        if let Some(status) = source.status() {
            return ClientError::Status {
                url,
                status,
                source,
            };
        }
        if source.is_connect() || source.is_request() || source.is_body() {
            ClientError::Transport { url, source }
        } else {
            ClientError::Request { url, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn payload_errors_are_general() {
        let err = ClientError::InvalidJson {
            url: "http://localhost/a".to_string(),
            source: json_error(),
        };
        assert_eq!(err.kind(), ErrorKind::General);
        assert_eq!(err.url(), "http://localhost/a");

        let err = ClientError::UnexpectedPayload {
            url: "http://localhost/b".to_string(),
            source: json_error(),
        };
        assert!(!err.is_communication());
    }

    #[test]
    fn timeout_is_communication() {
        let err = ClientError::Timeout {
            url: "http://localhost".to_string(),
            source: "deadline has elapsed".into(),
        };
        assert!(err.is_communication());
        assert!(err.source().is_some());
    }
}
