//! Errors returned by the content client.

use std::fmt;

use super::network::NetworkError;

/// Failure of a content API read.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// The request failed or returned a non-success status.
    Network(NetworkError),

    /// The body was not the JSON shape we expected.
    Decode { resource: String, message: String },

    /// A by-slug lookup came back as an empty array.
    NotFound { slug: String },
}

impl ContentError {
    /// Network and decode failures get a retry button; a missing page does not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ContentError::Network(_) | ContentError::Decode { .. } => true,
            ContentError::NotFound { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ContentError::Network(err) => err.user_message(),
            ContentError::Decode { .. } => "A szerver válasza nem értelmezhető.".to_string(),
            ContentError::NotFound { .. } => "Az oldal nem található.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::Network(err) => err.error_code(),
            ContentError::Decode { .. } => "E_CONTENT_DECODE",
            ContentError::NotFound { .. } => "E_CONTENT_NOT_FOUND",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Network(err) => write!(f, "{}", err),
            ContentError::Decode { resource, message } => {
                write!(f, "Failed to decode {}: {}", resource, message)
            }
            ContentError::NotFound { slug } => write!(f, "No page with slug '{}'", slug),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NetworkError> for ContentError {
    fn from(err: NetworkError) -> Self {
        ContentError::Network(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_retryable() {
        let err = ContentError::NotFound {
            slug: "rolam".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.error_code(), "E_CONTENT_NOT_FOUND");
        assert!(err.to_string().contains("rolam"));
    }

    #[test]
    fn test_decode_is_retryable() {
        let err = ContentError::Decode {
            resource: "posts".to_string(),
            message: "expected value".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_network_error_converts() {
        let err: ContentError = NetworkError::Other {
            message: "reset".to_string(),
        }
        .into();
        assert!(matches!(err, ContentError::Network(_)));
        assert_eq!(err.error_code(), "E_NET_OTHER");
    }
}
