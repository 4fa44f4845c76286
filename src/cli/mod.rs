//! Command-line handling that runs before the TUI starts.
//!
//! ```ignore
//! use konyhanyelv::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command); // exits for --version / --help
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_help_command, handle_version_command, usage, VERSION};

/// Run a non-TUI command. Returns only for [`CliCommand::RunTui`].
pub fn run_cli_command(command: CliCommand) {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui => {}
    }
}
