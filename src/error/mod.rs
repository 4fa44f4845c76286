//! Error handling for the client.
//!
//! - **Error Categories**: classification used to pick retry affordances
//! - **Domain-specific Errors**: Network, Content, Validation, Storage
//! - **Unified Error Type**: `AppError` wraps all of them
//! - **Result Type Alias**: `AppResult<T>`
//!
//! | Error | Raised by | Retry offered |
//! |-------|-----------|---------------|
//! | NetworkError | content client transport / non-2xx | Yes |
//! | ContentError::Decode | malformed JSON body | Yes |
//! | ContentError::NotFound | empty by-slug result | No |
//! | ValidationError | health input parsing | No |
//! | StorageError | key-value store | No |
//!
//! Every error is caught at the screen that attempted the I/O and turned into
//! an inline message. The navigator never sees any of them.

mod app_error;
mod category;
mod content;
mod network;
mod result;
mod storage;
mod validation;

pub use app_error::AppError;
pub use category::ErrorCategory;
pub use content::ContentError;
pub use network::NetworkError;
pub use result::AppResult;
pub use storage::StorageError;
pub use validation::ValidationError;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let net: AppError = NetworkError::Timeout {
            url: "https://example.com".to_string(),
        }
        .into();
        let decode: AppError = ContentError::Decode {
            resource: "posts".to_string(),
            message: "eof".to_string(),
        }
        .into();
        let missing: AppError = ContentError::NotFound {
            slug: "x".to_string(),
        }
        .into();
        let invalid: AppError = ValidationError::NotANumber {
            field: "weight",
            input: "abc".to_string(),
        }
        .into();
        let storage: AppError = StorageError::Unavailable("offline".to_string()).into();

        assert_eq!(net.category(), ErrorCategory::Network);
        assert_eq!(decode.category(), ErrorCategory::Server);
        assert_eq!(missing.category(), ErrorCategory::NotFound);
        assert_eq!(invalid.category(), ErrorCategory::User);
        assert_eq!(storage.category(), ErrorCategory::System);

        for err in [&net, &decode, &missing, &invalid, &storage] {
            assert!(!err.user_message().is_empty());
            assert!(!err.error_code().is_empty());
        }
    }

    #[test]
    fn test_retry_only_for_fetch_failures() {
        let server: AppError = NetworkError::HttpStatus {
            url: "u".to_string(),
            status: 500,
        }
        .into();
        assert!(server.is_retryable());
        assert_eq!(server.category(), ErrorCategory::Server);

        let invalid: AppError = ValidationError::Empty { field: "sleep" }.into();
        assert!(!invalid.is_retryable());

        let missing: AppError = ContentError::NotFound {
            slug: "x".to_string(),
        }
        .into();
        assert!(!missing.is_retryable());
    }

    #[test]
    fn test_validation_message_is_hungarian() {
        let err: AppError = ValidationError::NotANumber {
            field: "weight",
            input: "abc".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Kérlek adj meg egy érvényes számot!");
    }
}
