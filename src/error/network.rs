//! Network-related error types.
//!
//! Errors raised while talking to the content API: the request never got an
//! answer, or the answer carried a non-success status.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { url: String, status: u16 },

    /// Generic transport error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::Other { .. } => true,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Nem sikerült csatlakozni a szerverhez.".to_string()
            }
            NetworkError::Timeout { .. } => "A szerver nem válaszolt időben.".to_string(),
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "A kért tartalom nem található.".to_string(),
                500..=599 => "A szerver hibát jelzett. Próbáld újra később.".to_string(),
                _ => format!("A szerver hibával válaszolt (HTTP {}).", status),
            },
            NetworkError::Other { .. } => "Hálózati hiba történt.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Classify a transport-level [`HttpError`] raised for `url`.
    pub fn from_http_error(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::ServerError { status, .. } => NetworkError::HttpStatus {
                url: url.to_string(),
                status,
            },
            HttpError::InvalidUrl(message) | HttpError::Other(message) => {
                NetworkError::Other { message }
            }
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { url, status } => {
                write!(f, "HTTP {} from '{}'", status, url)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = NetworkError::HttpStatus {
            url: "https://example.com".to_string(),
            status: 500,
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_HTTP");
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        let err = NetworkError::HttpStatus {
            url: "https://example.com".to_string(),
            status: 403,
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_http_error_keeps_status() {
        let err = NetworkError::from_http_error(
            HttpError::ServerError {
                status: 502,
                message: "bad gateway".to_string(),
            },
            "https://example.com/wp-json/wp/v2/posts",
        );
        assert_eq!(
            err,
            NetworkError::HttpStatus {
                url: "https://example.com/wp-json/wp/v2/posts".to_string(),
                status: 502,
            }
        );
    }

    #[test]
    fn test_display_mentions_url() {
        let err = NetworkError::Timeout {
            url: "https://example.com".to_string(),
        };
        assert!(err.to_string().contains("example.com"));
    }
}
