//! Progress of a screen's network read.

use crate::error::AppError;

/// Why a load failed, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// Hungarian text shown inline
    pub message: String,
    /// Whether the view offers a retry
    pub retryable: bool,
}

impl LoadFailure {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            message: err.user_message(),
            retryable: err.is_retryable(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(LoadFailure),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Convert a fetch result, logging failures.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<AppError>,
    {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => {
                let err: AppError = err.into();
                tracing::warn!(code = err.error_code(), error = %err, "Load failed");
                LoadState::Failed(LoadFailure::from_error(&err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;

    #[test]
    fn test_from_result() {
        let ok: LoadState<u8> = LoadState::from_result::<ContentError>(Ok(3));
        assert_eq!(ok.loaded(), Some(&3));

        let err: LoadState<u8> = LoadState::from_result(Err(ContentError::NotFound {
            slug: "x".to_string(),
        }));
        let failure = err.failure().unwrap();
        assert!(!failure.retryable);
        assert_eq!(failure.message, "Az oldal nem található.");
    }
}
