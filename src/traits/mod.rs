//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the content client
//! - [`KeyValueStore`] - flat persisted key-value map
//! - [`UrlOpener`] - hands URLs to the system browser

pub mod http;
pub mod opener;
pub mod store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use opener::UrlOpener;
pub use store::KeyValueStore;
