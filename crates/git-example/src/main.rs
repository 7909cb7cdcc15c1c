//! Pretend git CLI showing how a clap application adds `--totalhelp`.
//!
//! It is NOT a real application. Every command just echoes what it was
//! asked to do.
//!
//! ```text
//! git-example --totalhelp
//! git-example --totalhelp --format html --open
//! ```

use anyhow::Result;
use clap::{Args, Command, CommandFactory, FromArgMatches, Parser, Subcommand};
use totalhelp::augment::{add_totalhelp_flag, handle_totalhelp, FlagOptions};

/// A pretend Git CLI to demonstrate totalhelp.
#[derive(Parser, Debug)]
#[command(name = "git")]
#[command(after_help = "Thanks for using our fake tool!")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage set of tracked repositories.
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },
    /// Show commit logs.
    Log(LogArgs),
    /// Get and set repository or global options.
    Config(ConfigArgs),
}

#[derive(Subcommand, Debug)]
enum RemoteCommands {
    /// Add a remote repository.
    Add {
        /// Name for the new remote.
        name: String,
        /// URL for the new remote.
        url: String,
    },
    /// Remove a remote.
    Remove {
        /// Name of the remote to remove.
        name: String,
    },
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Show logs in a compact one-line format.
    #[arg(long)]
    oneline: bool,

    /// Limit the number of commits to show.
    #[arg(short = 'n', long)]
    max_count: Option<usize>,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Use global configuration file.
    #[arg(long = "global")]
    is_global: bool,

    /// Configuration key (e.g., user.name).
    key: String,

    /// Value to set for the key.
    value: Option<String>,
}

fn build_command() -> Command {
    add_totalhelp_flag(Cli::command(), &FlagOptions::default())
}

fn execute(command: Commands) -> String {
    match command {
        Commands::Remote {
            command: RemoteCommands::Add { name, url },
        } => format!("Adding remote '{name}' with URL '{url}'"),
        Commands::Remote {
            command: RemoteCommands::Remove { name },
        } => format!("Removing remote '{name}'"),
        Commands::Log(args) => {
            let mut line = String::from("Showing logs");
            if args.oneline {
                line.push_str(" (oneline)");
            }
            if let Some(n) = args.max_count {
                line.push_str(&format!(" (max {n})"));
            }
            line
        }
        Commands::Config(args) => {
            let scope = if args.is_global { "global" } else { "local" };
            match args.value {
                Some(value) => format!("Setting {scope} '{}' to '{value}'", args.key),
                None => format!("Getting {scope} '{}'", args.key),
            }
        }
    }
}

fn main() -> Result<()> {
    let mut cmd = build_command();
    let matches = cmd.clone().get_matches();

    if handle_totalhelp(&mut cmd, &matches)? {
        return Ok(());
    }

    let cli = Cli::from_arg_matches(&matches)?;
    match cli.command {
        Some(command) => println!("{}", execute(command)),
        None => cmd.print_help()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use totalhelp::augment::TotalHelpRequest;
    use totalhelp::{full_help_from_command, Format};

    #[test]
    fn test_command_definition() {
        build_command().debug_assert();
    }

    #[test]
    fn test_totalhelp_covers_nested_remote_commands() {
        let mut cmd = build_command();
        let doc = full_help_from_command(&mut cmd, None, Format::Text).unwrap();

        for banner in [
            "$ git --help",
            "$ git remote --help",
            "$ git log --help",
            "$ git config --help",
            "$ git remote add --help",
            "$ git remote remove --help",
        ] {
            assert!(doc.contains(banner), "missing {banner}");
        }
        assert!(doc.contains("Usage: git remote add <NAME> <URL>"));
        assert!(doc.contains("Total Help Options"));
    }

    #[test]
    fn test_flag_parses_without_subcommand() {
        let matches = build_command()
            .try_get_matches_from(["git", "--totalhelp", "--format", "md"])
            .unwrap();
        let request = TotalHelpRequest::from_matches(&matches).unwrap();
        assert_eq!(request.format, Format::Markdown);
    }

    #[test]
    fn test_regular_commands_still_run() {
        let matches = build_command()
            .try_get_matches_from(["git", "remote", "add", "origin", "https://example.com/repo.git"])
            .unwrap();
        assert_eq!(TotalHelpRequest::from_matches(&matches), None);

        let cli = Cli::from_arg_matches(&matches).unwrap();
        assert_eq!(
            execute(cli.command.unwrap()),
            "Adding remote 'origin' with URL 'https://example.com/repo.git'"
        );
    }

    #[test]
    fn test_config_echo() {
        let matches = build_command()
            .try_get_matches_from(["git", "config", "--global", "user.name", "Ada"])
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        assert_eq!(
            execute(cli.command.unwrap()),
            "Setting global 'user.name' to 'Ada'"
        );
    }
}
