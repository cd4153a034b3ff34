//! Command-line argument parsing for the trackdeck CLI.

use crate::export::ExportKind;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Fetch one export without starting the TUI
    Export {
        kind: ExportKind,
        /// User scope; empty means all users
        user: String,
        /// Write an HTML table next to the CSV
        html: bool,
    },
    /// Arguments could not be understood
    Invalid(String),
    /// Run the TUI application (default)
    RunTui,
}

pub const USAGE: &str = "\
Usage: trackdeck [OPTIONS]

Without options the interactive console starts.

Options:
  --export <sessions|logs|crashes|summary>  Write one CSV export and exit
      --user <ID>                           Limit the export to one user
      --html                                Also write an HTML table
  -V, --version                             Print version
  -h, --help                                Print this help

Environment:
  TRACKDECK_API_URL, TRACKDECK_TOKEN, TRACKDECK_EXPORT_DIR, TRACKDECK_LOG";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use trackdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["trackdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut export: Option<ExportKind> = None;
    let mut user = String::new();
    let mut html = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--export" => {
                let Some(name) = args.next() else {
                    return CliCommand::Invalid("--export needs a value".to_string());
                };
                match ExportKind::from_cli_name(&name) {
                    Some(kind) => export = Some(kind),
                    None => {
                        return CliCommand::Invalid(format!("unknown export '{}'", name));
                    }
                }
            }
            "--user" => match args.next() {
                Some(value) => user = value,
                None => return CliCommand::Invalid("--user needs a value".to_string()),
            },
            "--html" => html = true,
            other => return CliCommand::Invalid(format!("unexpected argument '{}'", other)),
        }
    }

    match export {
        Some(kind) => CliCommand::Export { kind, user, html },
        None if !user.is_empty() || html => {
            CliCommand::Invalid("--user and --html require --export".to_string())
        }
        None => CliCommand::RunTui,
    }
}
