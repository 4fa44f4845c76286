//! Error category classification.
//!
//! Categories decide how a view reacts to a failure: whether it offers a
//! retry action and which hint it shows under the message.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems. Retryable.
    Network,

    /// The content server answered but the answer was unusable
    /// (HTTP 5xx, malformed body). Retryable.
    Server,

    /// The server answered with a well-formed "nothing here".
    NotFound,

    /// The user typed something we cannot accept.
    User,

    /// Local persistence or OS failures.
    System,
}

impl ErrorCategory {
    /// Returns true if the view should offer a manual retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }

    /// Hint shown under the inline error message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Ellenőrizd az internetkapcsolatot, majd próbáld újra.",
            ErrorCategory::Server => "A szerver most nem elérhető. Próbáld újra később.",
            ErrorCategory::NotFound => "A keresett oldal nem található.",
            ErrorCategory::User => "Ellenőrizd a megadott értéket.",
            ErrorCategory::System => "Ellenőrizd az adatkönyvtár jogosultságait.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::NotFound.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Network.as_str(), "network");
        assert_eq!(ErrorCategory::NotFound.as_str(), "not_found");
        assert_eq!(format!("{}", ErrorCategory::System), "system");
    }

    #[test]
    fn test_recovery_hint_not_empty() {
        for cat in [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::NotFound,
            ErrorCategory::User,
            ErrorCategory::System,
        ] {
            assert!(!cat.recovery_hint().is_empty());
        }
    }
}
