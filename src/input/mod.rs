//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! - [`command`] - the [`Command`] enum with all user actions
//! - [`context`] - [`InputContext`] snapshot of the relevant app state
//! - [`keybindings`] - default key binding tables
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, KeyScope, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
