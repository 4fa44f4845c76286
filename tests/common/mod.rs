//! Common test utilities for integration tests.
//!
//! ```ignore
//! let mut harness = TestApp::new();
//! harness.http.set_response(POSTS_URL, MockResponse::json(posts_json(&[1, 2])));
//! harness.app.navigate(NavTarget::Blog, NavParams::none());
//! harness.pump().await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::mpsc::UnboundedReceiver;

use konyhanyelv::adapters::mock::{InMemoryStore, MockHttpClient, RecordingOpener};
use konyhanyelv::app::{App, AppMessage, AppServices};

pub const BASE_URL: &str = "https://example.org";
pub const POSTS_URL: &str = "https://example.org/wp-json/wp/v2/posts";

/// 2024-05-10 09:00, after the default 08:00 reminder time.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 10)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid fixed date")
}

pub fn today() -> NaiveDate {
    fixed_now().date()
}

pub fn page_url(slug: &str) -> String {
    format!("{}/wp-json/wp/v2/pages?slug={}", BASE_URL, slug)
}

/// JSON array of posts with the given ids.
pub fn posts_json(ids: &[u64]) -> String {
    let posts: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "date": "2024-01-05T09:30:00",
                "link": format!("{}/bejegyzes-{}/", BASE_URL, id),
                "title": { "rendered": format!("Bejegyz&eacute;s {}", id) },
                "excerpt": { "rendered": "<p>R&ouml;vid [&hellip;]</p>" },
                "content": { "rendered": format!("<p>Tartalom {}</p>", id) },
            })
        })
        .collect();
    serde_json::Value::Array(posts).to_string()
}

/// JSON array holding one page.
pub fn page_json(slug: &str, title: &str, content: &str) -> String {
    serde_json::json!([{
        "id": 11,
        "slug": slug,
        "link": format!("{}/{}/", BASE_URL, slug),
        "title": { "rendered": title },
        "content": { "rendered": content },
    }])
    .to_string()
}

/// An [`App`] wired to mock collaborators, with its message receiver.
pub struct TestApp {
    pub app: App,
    pub http: MockHttpClient,
    pub store: Arc<InMemoryStore>,
    pub opener: Arc<RecordingOpener>,
    rx: UnboundedReceiver<AppMessage>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }

    pub fn with_store(store: InMemoryStore) -> Self {
        let http = MockHttpClient::new();
        let store = Arc::new(store);
        let opener = Arc::new(RecordingOpener::new());
        let mut app = App::with_clock(
            AppServices {
                http: Arc::new(http.clone()),
                store: store.clone(),
                opener: opener.clone(),
                base_url: BASE_URL.to_string(),
            },
            fixed_now,
        );
        let rx = app.message_rx.take().expect("receiver present on a new app");
        Self {
            app,
            http,
            store,
            opener,
            rx,
        }
    }

    /// Wait for one background result and apply it.
    pub async fn pump(&mut self) {
        let msg = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("background result within 5s")
            .expect("channel open");
        self.app.handle_message(msg);
    }

    /// Wait for one background result without applying it.
    pub async fn next_message(&mut self) -> AppMessage {
        tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("background result within 5s")
            .expect("channel open")
    }
}
