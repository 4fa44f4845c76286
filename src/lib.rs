//! Egészség Konyhanyelven - a terminal client for the wellness site
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod health;
pub mod input;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod settings;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
