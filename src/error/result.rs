//! Result type alias for application operations.

use super::app_error::AppError;

/// Type alias for Results using [`AppError`].
///
/// # Example
///
/// ```ignore
/// use konyhanyelv::error::AppResult;
///
/// fn save(input: &str) -> AppResult<f64> {
///     let value = parse_decimal("weight", input)?;
///     store.set("health_weight", &value.to_string())?;
///     Ok(value)
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
