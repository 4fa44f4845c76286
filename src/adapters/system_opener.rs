//! System browser adapter for [`UrlOpener`].

use crate::traits::UrlOpener;

/// Opens URLs in the user's default browser via the `webbrowser` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        tracing::info!(url, "Opening in system browser");
        webbrowser::open(url)
    }
}
