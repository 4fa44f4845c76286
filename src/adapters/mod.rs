//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - JSON-file key-value store
//! - [`SystemBrowser`] - opens URLs with the default browser
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters.

pub mod file_store;
pub mod mock;
pub mod reqwest_http;
pub mod system_opener;

pub use file_store::FileStore;
pub use mock::{InMemoryStore, MockHttpClient, RecordingOpener};
pub use reqwest_http::ReqwestHttpClient;
pub use system_opener::SystemBrowser;
