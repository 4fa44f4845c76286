//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments, program name first.
///
/// ```
/// use konyhanyelv::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["konyhanyelv".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["konyhanyelv", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["konyhanyelv", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["konyhanyelv", "--help"]), CliCommand::Help);
        assert_eq!(parse(&["konyhanyelv", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["konyhanyelv"]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["konyhanyelv", "--unknown"]), CliCommand::RunTui);
    }

    #[test]
    fn test_program_name_is_skipped() {
        assert_eq!(parse(&["--version"]), CliCommand::RunTui);
    }
}
