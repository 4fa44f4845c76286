//! Login state backed by the site's own login page.
//!
//! The terminal cannot host the site's login form, so the login page opens
//! in the system browser. The user pastes the address the browser ended up
//! on; an address inside the members area means the login worked.

use std::sync::Arc;

use crate::error::StorageError;
use crate::models::tiles::app_page_url;
use crate::traits::{KeyValueStore, UrlOpener};

/// Store key of the persisted login flag.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Path fragments only reachable after logging in.
pub const AUTHENTICATED_PATHS: [&str; 3] = ["/tagoknak/", "/fiokom/", "/my-account/"];

/// Whether a landed URL is inside the members area.
pub fn is_authenticated_url(url: &str) -> bool {
    AUTHENTICATED_PATHS.iter().any(|path| url.contains(path))
}

/// Persists the login flag and drives the browser side of the login.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn KeyValueStore>,
    opener: Arc<dyn UrlOpener>,
    base_url: String,
}

impl AuthSession {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        opener: Arc<dyn UrlOpener>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            opener,
            base_url: base_url.into(),
        }
    }

    /// `{base}/belepes/?app=1`
    pub fn login_url(&self) -> String {
        app_page_url(&self.base_url, "belepes")
    }

    pub fn open_login_page(&self) -> std::io::Result<()> {
        self.opener.open(&self.login_url())
    }

    /// Whether a previous run left the user logged in.
    pub fn restore(&self) -> bool {
        match self.store.get(LOGGED_IN_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!(error = %err, "Could not read login flag");
                false
            }
        }
    }

    /// Feed one observed navigation target.
    ///
    /// Returns `Ok(true)` when `url` is inside the members area and the flag
    /// was persisted; the caller then completes the login.
    pub fn observe_url(&self, url: &str) -> Result<bool, StorageError> {
        let url = url.trim();
        if !is_authenticated_url(url) {
            tracing::debug!(url, "Not a members-area URL");
            return Ok(false);
        }
        self.store.set(LOGGED_IN_KEY, "true")?;
        tracing::info!("Login detected");
        Ok(true)
    }

    /// Forget the login. A store failure is logged and otherwise ignored.
    pub fn logout(&self) {
        if let Err(err) = self.store.remove(LOGGED_IN_KEY) {
            tracing::error!(error = %err, code = err.error_code(), "Could not clear login flag");
        }
        tracing::info!("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStore, RecordingOpener};

    fn session(store: &InMemoryStore, opener: &RecordingOpener) -> AuthSession {
        AuthSession::new(
            Arc::new(store.clone()),
            Arc::new(opener.clone()),
            "https://example.org",
        )
    }

    #[test]
    fn test_login_url_opens_in_browser() {
        let store = InMemoryStore::new();
        let opener = RecordingOpener::new();
        let auth = session(&store, &opener);
        auth.open_login_page().unwrap();
        assert_eq!(opener.opened(), vec!["https://example.org/belepes/?app=1"]);
    }

    #[test]
    fn test_members_area_url_logs_in() {
        let store = InMemoryStore::new();
        let auth = session(&store, &RecordingOpener::new());

        assert!(!auth.observe_url("https://example.org/belepes/?app=1").unwrap());
        assert!(!auth.restore());

        assert!(auth.observe_url(" https://example.org/tagoknak/?app=1 ").unwrap());
        assert_eq!(store.peek(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert!(auth.restore());
    }

    #[test]
    fn test_every_members_path_counts() {
        for path in AUTHENTICATED_PATHS {
            assert!(is_authenticated_url(&format!("https://example.org{}", path)));
        }
    }

    #[test]
    fn test_logout_clears_flag() {
        let store = InMemoryStore::with_entries([(LOGGED_IN_KEY, "true")]);
        let auth = session(&store, &RecordingOpener::new());
        auth.logout();
        assert_eq!(store.peek(LOGGED_IN_KEY), None);
    }

    #[test]
    fn test_logout_survives_storage_error() {
        let store = InMemoryStore::with_entries([(LOGGED_IN_KEY, "true")]);
        store.set_write_should_fail(true);
        let auth = session(&store, &RecordingOpener::new());
        auth.logout();
        assert_eq!(store.peek(LOGGED_IN_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_store_failure_blocks_login() {
        let store = InMemoryStore::new();
        store.set_write_should_fail(true);
        let auth = session(&store, &RecordingOpener::new());
        assert!(auth.observe_url("https://example.org/fiokom/").is_err());
    }
}
