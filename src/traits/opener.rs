//! External URL opener trait.
//!
//! Anything that leaves the terminal (checkout pages, the login page, the
//! original article link) goes through this seam.

/// Hands a URL to something outside the app, normally the system browser.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}
