//! Adding a `--totalhelp` flag to an existing clap command.
//!
//! ```no_run
//! use clap::Command;
//! use totalhelp::augment::{add_totalhelp_flag, handle_totalhelp, FlagOptions};
//!
//! let mut cmd = add_totalhelp_flag(
//!     Command::new("git").subcommand(Command::new("log")),
//!     &FlagOptions::default(),
//! );
//! let matches = cmd.clone().get_matches();
//! if handle_totalhelp(&mut cmd, &matches).unwrap() {
//!     std::process::exit(0);
//! }
//! ```

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::discover::full_help_from_command;
use crate::error::TotalHelpError;
use crate::output::print_output;
use crate::render::Format;

/// Arg id of the trigger flag.
pub const TOTALHELP_ID: &str = "_totalhelp";
/// Arg id of the `--format` option.
pub const FORMAT_ID: &str = "_totalhelp_format";
/// Arg id of the `--open` flag.
pub const OPEN_ID: &str = "_totalhelp_open";

const HEADING: &str = "Total Help Options";

/// Which flags to add.
#[derive(Debug, Clone)]
pub struct FlagOptions {
    /// Long name of the trigger flag.
    pub flag: &'static str,
    /// Visible aliases of the trigger flag.
    pub aliases: Vec<&'static str>,
    /// Add `--format {text,md,html}`.
    pub add_format_option: bool,
    /// Add `--open`.
    pub add_open_option: bool,
}

impl Default for FlagOptions {
    fn default() -> Self {
        Self {
            flag: "totalhelp",
            aliases: vec!["superhelp"],
            add_format_option: true,
            add_open_option: true,
        }
    }
}

/// Return `cmd` with the totalhelp flags added under their own help heading.
pub fn add_totalhelp_flag(cmd: Command, options: &FlagOptions) -> Command {
    let mut cmd = cmd.arg(
        Arg::new(TOTALHELP_ID)
            .long(options.flag)
            .visible_aliases(options.aliases.clone())
            .action(ArgAction::SetTrue)
            .help_heading(HEADING)
            .help("Show a monolithic help document for all commands and exit"),
    );

    if options.add_format_option {
        cmd = cmd.arg(
            Arg::new(FORMAT_ID)
                .long("format")
                .value_name("FORMAT")
                .value_parser(Format::NAMES)
                .default_value(Format::Text.as_str())
                .help_heading(HEADING)
                .help("Output format for the total help document"),
        );
    }

    if options.add_open_option {
        cmd = cmd.arg(
            Arg::new(OPEN_ID)
                .long("open")
                .action(ArgAction::SetTrue)
                .help_heading(HEADING)
                .help("Open the generated help in a web browser (HTML only)"),
        );
    }

    cmd
}

/// A parsed request for a total help document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalHelpRequest {
    pub format: Format,
    pub open: bool,
}

impl TotalHelpRequest {
    /// Read the request back from parsed matches.
    ///
    /// Returns `None` when the trigger flag was not given, or was never
    /// added to the command.
    pub fn from_matches(matches: &ArgMatches) -> Option<Self> {
        let requested = matches
            .try_get_one::<bool>(TOTALHELP_ID)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false);
        if !requested {
            return None;
        }

        let format = matches
            .try_get_one::<String>(FORMAT_ID)
            .ok()
            .flatten()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default();
        let open = matches
            .try_get_one::<bool>(OPEN_ID)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false);

        Some(Self { format, open })
    }
}

/// Emit the total help document if it was requested.
///
/// Returns `Ok(true)` when the document was emitted and the caller should
/// exit, `Ok(false)` when the flag was absent.
pub fn handle_totalhelp(cmd: &mut Command, matches: &ArgMatches) -> Result<bool, TotalHelpError> {
    let Some(request) = TotalHelpRequest::from_matches(matches) else {
        return Ok(false);
    };

    let doc = full_help_from_command(cmd, None, request.format)?;
    print_output(&doc, request.format, request.open);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> Command {
        add_totalhelp_flag(
            Command::new("app").subcommand(Command::new("run")),
            &FlagOptions::default(),
        )
    }

    #[test]
    fn test_request_absent_by_default() {
        let matches = cli().try_get_matches_from(["app"]).unwrap();
        assert_eq!(TotalHelpRequest::from_matches(&matches), None);
    }

    #[test]
    fn test_request_defaults_to_text() {
        let matches = cli().try_get_matches_from(["app", "--totalhelp"]).unwrap();
        assert_eq!(
            TotalHelpRequest::from_matches(&matches),
            Some(TotalHelpRequest {
                format: Format::Text,
                open: false
            })
        );
    }

    #[test]
    fn test_alias_format_and_open() {
        let matches = cli()
            .try_get_matches_from(["app", "--superhelp", "--format", "html", "--open"])
            .unwrap();
        assert_eq!(
            TotalHelpRequest::from_matches(&matches),
            Some(TotalHelpRequest {
                format: Format::Html,
                open: true
            })
        );
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = cli().try_get_matches_from(["app", "--totalhelp", "--format", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_minimal_options() {
        let options = FlagOptions {
            flag: "all-help",
            aliases: vec![],
            add_format_option: false,
            add_open_option: false,
        };
        let cmd = add_totalhelp_flag(Command::new("app"), &options);
        assert!(cmd.clone().try_get_matches_from(["app", "--format", "md"]).is_err());

        let matches = cmd.try_get_matches_from(["app", "--all-help"]).unwrap();
        assert_eq!(
            TotalHelpRequest::from_matches(&matches),
            Some(TotalHelpRequest {
                format: Format::Text,
                open: false
            })
        );
    }

    #[test]
    fn test_flags_grouped_in_help() {
        let help = cli().render_help().to_string();
        assert!(help.contains("Total Help Options:"));
        assert!(help.contains("--totalhelp"));
        assert!(help.contains("superhelp"));
    }

    #[test]
    fn test_handle_without_flag_is_noop() {
        let mut cmd = cli();
        let matches = cmd.clone().try_get_matches_from(["app", "run"]).unwrap();
        assert!(!handle_totalhelp(&mut cmd, &matches).unwrap());
    }

    #[test]
    fn test_from_matches_on_foreign_command() {
        let matches = Command::new("bare").try_get_matches_from(["bare"]).unwrap();
        assert_eq!(TotalHelpRequest::from_matches(&matches), None);
    }
}
