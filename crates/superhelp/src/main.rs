//! `superhelp`: total help for any installed command.
//!
//! Recursively runs `<command> --help`, guesses subcommands from the output
//! and prints everything as a single document.
//!
//! ```text
//! superhelp                      # probes `python`
//! superhelp --format md git
//! superhelp --format html --open python -m pip
//! ```

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use totalhelp::output::print_output;
use totalhelp::{full_help_external, Format, ProbeConfig};

#[derive(Parser, Debug)]
#[command(name = "superhelp", version)]
#[command(about = "Show the help of a command and all of its subcommands as one document")]
struct Cli {
    /// Output format: text, md or html
    #[arg(long, default_value = "text", value_parser = parse_format)]
    format: Format,

    /// Open the generated document in a web browser (HTML only)
    #[arg(long)]
    open: bool,

    /// Seconds to wait for each help invocation
    #[arg(long, default_value_t = 5.0)]
    timeout: f64,

    /// Deepest subcommand path to probe
    #[arg(long, default_value_t = 4)]
    max_depth: usize,

    /// Flag used to request help from the command
    #[arg(long, default_value = "--help", allow_hyphen_values = true)]
    help_flag: String,

    /// Extra environment for every child process (repeatable)
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    env: Vec<(String, String)>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// The command to probe, with any fixed leading arguments
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        default_values = ["python"],
        value_name = "COMMAND"
    )]
    command: Vec<String>,
}

impl Cli {
    fn probe_config(&self) -> Result<ProbeConfig> {
        if self.timeout.is_nan() || self.timeout <= 0.0 {
            bail!("--timeout must be a positive number of seconds");
        }
        let timeout = Duration::try_from_secs_f64(self.timeout)
            .with_context(|| format!("invalid --timeout value {}", self.timeout))?;

        let mut config = ProbeConfig::default()
            .with_max_depth(self.max_depth)
            .with_timeout(timeout)
            .with_help_flag(self.help_flag.clone());
        if !self.env.is_empty() {
            config = config.with_env(self.env.iter().cloned().collect::<HashMap<_, _>>());
        }
        Ok(config)
    }
}

fn parse_format(s: &str) -> Result<Format, String> {
    s.parse().map_err(|e: totalhelp::TotalHelpError| e.to_string())
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty variable name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.probe_config()?;
    tracing::info!(command = ?cli.command, format = %cli.format, "probing");

    let doc = full_help_external(&cli.command, cli.format, &config)
        .with_context(|| format!("failed to build help for '{}'", cli.command.join(" ")))?;
    print_output(&doc, cli.format, cli.open);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
