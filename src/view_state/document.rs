//! A rendered post or page, ready for the detail views.

use crate::content::html::{render_blocks, RenderedHtml};
use crate::models::{Page, Post};

use super::{LoadState, ScrollState};

/// Title, canonical link and body blocks of a post or page.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    /// Subtitle line, e.g. the publication date
    pub meta: Option<String>,
    pub link: String,
    pub body: RenderedHtml,
}

impl Document {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title_text(),
            meta: Some(post.display_date()).filter(|d| !d.is_empty()),
            link: post.link.clone(),
            body: render_blocks(&post.content.rendered),
        }
    }

    pub fn from_page(page: &Page) -> Self {
        Self {
            title: page.title_text(),
            meta: None,
            link: page.link.clone(),
            body: render_blocks(&page.content.rendered),
        }
    }
}

/// State of a detail screen. `key` is the slug or URL the content belongs to;
/// results for any other key are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentView {
    pub key: String,
    pub state: LoadState<Document>,
    pub scroll: ScrollState,
}

impl DocumentView {
    /// Point the view at new content and mark it loading.
    pub fn begin(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.state = LoadState::Loading;
        self.scroll.reset();
    }

    /// Show content that needs no fetch.
    pub fn show(&mut self, key: impl Into<String>, document: Document) {
        self.key = key.into();
        self.state = LoadState::Loaded(document);
        self.scroll.reset();
    }

    pub fn clear(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.state = LoadState::Idle;
        self.scroll.reset();
    }

    pub fn document(&self) -> Option<&Document> {
        self.state.loaded()
    }
}
