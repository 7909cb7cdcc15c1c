//! Monolithic help documents for command-line programs.
//!
//! `totalhelp` collects the help text of a command and every subcommand
//! beneath it, then renders all of it as one document: plain text,
//! Markdown, or a self-contained HTML page.
//!
//! Two discovery sources feed the same renderer:
//!
//! - **In-process**: [`walk`] traverses a [`CommandTree`] (implemented for
//!   [`clap::Command`]) and knows the exact structure.
//! - **External**: [`Prober`] runs `<command> --help` recursively and infers
//!   children from the output with a heuristic [`Extractor`].
//!
//! # Quick Start
//!
//! ```
//! use clap::Command;
//! use totalhelp::{full_help_from_command, Format};
//!
//! let mut cmd = Command::new("git")
//!     .subcommand(Command::new("remote").subcommand(Command::new("add")))
//!     .subcommand(Command::new("log"));
//!
//! let doc = full_help_from_command(&mut cmd, None, Format::Markdown).unwrap();
//! assert!(doc.contains("#### `git remote add`"));
//! ```
//!
//! Probing a program that is not built with clap:
//!
//! ```no_run
//! use totalhelp::{full_help_external, Format, ProbeConfig};
//!
//! let command = vec!["python".to_string(), "-m".to_string(), "pip".to_string()];
//! let doc = full_help_external(&command, Format::Text, &ProbeConfig::default()).unwrap();
//! println!("{doc}");
//! ```
//!
//! # Host integration
//!
//! [`augment::add_totalhelp_flag`] adds `--totalhelp`, `--format` and
//! `--open` to an existing command, and [`augment::handle_totalhelp`]
//! answers them after parsing.

pub mod augment;
mod discover;
mod error;
pub mod extract;
mod node;
pub mod output;
pub mod probe;
pub mod render;
pub mod walk;

pub use discover::{
    full_help, full_help_external, full_help_from_command, full_help_from_tree, Discover,
    ExternalSource, TreeSource,
};
pub use error::TotalHelpError;
pub use extract::{extract, Extractor, LabeledSection, Strategy, UsageBraces};
pub use node::Node;
pub use probe::{probe, HelpRunner, ProbeConfig, Prober, RunOutcome, ScriptedRunner, SystemRunner};
pub use render::{render, Format};
pub use walk::{walk, CommandTree, ScopedName, Walk};
