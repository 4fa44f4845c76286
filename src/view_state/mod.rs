//! Per-screen view state owned by `App` and read by `ui`.
//!
//! The navigator decides which screen is shown; these structs hold what
//! that screen displays (loaded data, cursor, scroll, inline messages).

mod document;
mod load_state;
mod menu;
mod scroll_state;
mod status;
mod views;

pub use document::{Document, DocumentView};
pub use load_state::{LoadFailure, LoadState};
pub use menu::MenuCursor;
pub use scroll_state::ScrollState;
pub use status::{StatusKind, StatusLine, STATUS_TTL_TICKS};
pub use views::{BlogView, HealthField, HealthView, LoginView};
