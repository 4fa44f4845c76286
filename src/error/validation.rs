//! Validation errors for values typed on the health screen.

use std::fmt;

/// A user-entered value that was rejected before any write happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Nothing (or only whitespace) was entered.
    Empty { field: &'static str },

    /// The input is not a finite number.
    NotANumber { field: &'static str, input: String },

    /// The number parsed but is outside the accepted range.
    OutOfRange { field: &'static str, input: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Empty { field }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ValidationError::Empty { .. } | ValidationError::NotANumber { .. } => {
                "Kérlek adj meg egy érvényes számot!".to_string()
            }
            ValidationError::OutOfRange { input, .. } => {
                format!("A megadott érték ({}) nem elfogadható.", input)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Empty { .. } => "E_VALID_EMPTY",
            ValidationError::NotANumber { .. } => "E_VALID_NAN",
            ValidationError::OutOfRange { .. } => "E_VALID_RANGE",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty { field } => write!(f, "{} is empty", field),
            ValidationError::NotANumber { field, input } => {
                write!(f, "{} is not a number: '{}'", field, input)
            }
            ValidationError::OutOfRange { field, input } => {
                write!(f, "{} out of range: '{}'", field, input)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
