//! CLI module for trackdeck.
//!
//! Provides argument parsing, version display and the headless export
//! command. The dispatcher runs before the TUI is initialised:
//!
//! ```ignore
//! use trackdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, config) {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod export;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use export::{handle_export_command, run_export};
pub use version::{handle_version_command, VERSION};

use color_eyre::{eyre::eyre, Result};

use crate::config::ConsoleConfig;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - a CLI command executed successfully
/// * `Some(Err(e))` - a CLI command failed
///
/// `Version` never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: CliCommand, config: ConsoleConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => {
            eprintln!("{}", USAGE);
            Some(Err(eyre!(message)))
        }
        CliCommand::Export { kind, user, html } => {
            Some(handle_export_command(config, kind, &user, html))
        }
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(CliCommand::RunTui, ConsoleConfig::default());
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_returns_error() {
        let result = run_cli_command(
            CliCommand::Invalid("bad".to_string()),
            ConsoleConfig::default(),
        );
        assert!(matches!(result, Some(Err(_))));
    }
}
