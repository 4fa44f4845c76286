//! Key-value store trait abstraction.
//!
//! All persisted state is a flat map of string keys to string values with
//! last-writer-wins semantics. There is no cross-key atomicity: callers that
//! write a value and its date stamp issue two `set` calls in order.

use crate::error::StorageError;

/// Flat string key-value persistence.
///
/// # Example
///
/// ```ignore
/// use konyhanyelv::traits::KeyValueStore;
///
/// fn remember_login<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StorageError> {
///     store.set("isLoggedIn", "true")
/// }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read a key. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
