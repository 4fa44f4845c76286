//! AppMessage enum for results of background work.

use crate::error::ContentError;
use crate::models::{Page, Post};

/// Results posted back to the event loop by spawned fetches.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Blog list fetch finished
    PostsLoaded(Result<Vec<Post>, ContentError>),
    /// Page-by-slug fetch finished for the page detail screen
    PageLoaded {
        slug: String,
        result: Result<Page, ContentError>,
    },
    /// Page fetch finished for the web view screen
    WebPageLoaded {
        url: String,
        result: Result<Page, ContentError>,
    },
}
