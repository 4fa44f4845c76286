//! Local persistence errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of the on-device key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the store file failed.
    #[error("Store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a JSON object of strings.
    #[error("Store file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the in-memory map failed.
    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend refused the operation (used by test doubles).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn user_message(&self) -> String {
        "Nem sikerült menteni az adatot.".to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "E_STORE_IO",
            StorageError::Corrupt { .. } => "E_STORE_CORRUPT",
            StorageError::Serialize(_) => "E_STORE_SERIALIZE",
            StorageError::Unavailable(_) => "E_STORE_UNAVAILABLE",
        }
    }
}
