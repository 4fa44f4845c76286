//! Parsing of values typed on the health screen.

use crate::error::ValidationError;

/// Parse a decimal number, accepting `,` as the decimal separator.
pub fn parse_decimal(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field,
            input: trimmed.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            input: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Parse a decimal within `min..=max`.
pub fn parse_in_range(
    field: &'static str,
    input: &str,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    let value = parse_decimal(field, input)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            input: input.trim().to_string(),
        });
    }
    Ok(value)
}

/// Parse a non-negative whole number of steps.
pub fn parse_steps(field: &'static str, input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    match trimmed.parse::<u32>() {
        Ok(steps) => Ok(steps),
        // Numbers that are negative, fractional or too large.
        Err(_) if parse_decimal(field, trimmed).is_ok() => Err(ValidationError::OutOfRange {
            field,
            input: trimmed.to_string(),
        }),
        Err(_) => Err(ValidationError::NotANumber {
            field,
            input: trimmed.to_string(),
        }),
    }
}
