//! Unified error type for the application.
//!
//! `AppError` is what a screen receives when one of its I/O calls fails.
//! Views turn it into an inline message; nothing above the view sees it.

use std::fmt;

use super::category::ErrorCategory;
use super::content::ContentError;
use super::network::NetworkError;
use super::storage::StorageError;
use super::validation::ValidationError;

/// Unified error type.
#[derive(Debug)]
pub enum AppError {
    /// Content API failures (network, decode, not found).
    Content(ContentError),

    /// Rejected user input.
    Validation(ValidationError),

    /// Local persistence failures.
    Storage(StorageError),
}

impl AppError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Content(ContentError::Network(NetworkError::HttpStatus {
                status, ..
            })) if *status >= 500 => ErrorCategory::Server,
            AppError::Content(ContentError::Network(_)) => ErrorCategory::Network,
            AppError::Content(ContentError::Decode { .. }) => ErrorCategory::Server,
            AppError::Content(ContentError::NotFound { .. }) => ErrorCategory::NotFound,
            AppError::Validation(_) => ErrorCategory::User,
            AppError::Storage(_) => ErrorCategory::System,
        }
    }

    /// Whether the view should offer a retry action.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Content(err) => err.is_retryable(),
            AppError::Validation(_) | AppError::Storage(_) => false,
        }
    }

    /// Message shown inline on the screen that attempted the I/O.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Content(err) => err.user_message(),
            AppError::Validation(err) => err.user_message(),
            AppError::Storage(err) => err.user_message(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Content(err) => err.error_code(),
            AppError::Validation(err) => err.error_code(),
            AppError::Storage(err) => err.error_code(),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Content(err) => write!(f, "{}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Content(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Storage(err) => Some(err),
        }
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        AppError::Content(err)
    }
}

impl From<NetworkError> for AppError {
    fn from(err: NetworkError) -> Self {
        AppError::Content(ContentError::Network(err))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}
