//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - key-value store with failure switches
//! - [`RecordingOpener`] - URL opener that only records

pub mod http;
pub mod opener;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use opener::RecordingOpener;
pub use store::InMemoryStore;
