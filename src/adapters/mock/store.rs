//! In-memory key-value store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// In-memory [`KeyValueStore`] with switchable failures.
///
/// Clones share state, so a test can keep a handle while the app owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    /// Whether set/remove should fail
    write_should_fail: Arc<Mutex<bool>>,
    /// Whether get should fail
    read_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut entries = store.entries.lock().unwrap();
            for (key, value) in pairs {
                entries.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    /// Configure whether writes should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether reads should fail.
    pub fn set_read_should_fail(&self, should_fail: bool) {
        *self.read_should_fail.lock().unwrap() = should_fail;
    }

    /// Raw value, bypassing failure switches.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn fail_if(flag: &Arc<Mutex<bool>>, what: &str) -> Result<(), StorageError> {
        if *flag.lock().unwrap() {
            return Err(StorageError::Unavailable(format!("mock {} failure", what)));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::fail_if(&self.read_should_fail, "read")?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::fail_if(&self.write_should_fail, "write")?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::fail_if(&self.write_should_fail, "write")?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = InMemoryStore::new();
        store.set("isLoggedIn", "true").unwrap();
        assert_eq!(store.get("isLoggedIn").unwrap().as_deref(), Some("true"));
        store.remove("isLoggedIn").unwrap();
        assert_eq!(store.get("isLoggedIn").unwrap(), None);
    }

    #[test]
    fn test_write_failure_leaves_value() {
        let store = InMemoryStore::with_entries([("reminder_enabled", "false")]);
        store.set_write_should_fail(true);
        assert!(store.set("reminder_enabled", "true").is_err());
        assert_eq!(store.peek("reminder_enabled").as_deref(), Some("false"));
    }

    #[test]
    fn test_read_failure() {
        let store = InMemoryStore::new();
        store.set_read_should_fail(true);
        assert!(matches!(
            store.get("anything"),
            Err(StorageError::Unavailable(_))
        ));
    }
}
