//! One interface over both discovery sources, plus the `full_help*` entry
//! points that chain discovery into rendering.

use clap::Command;

use crate::error::TotalHelpError;
use crate::node::Node;
use crate::probe::{HelpRunner, ProbeConfig, Prober, SystemRunner};
use crate::render::{render, Format};
use crate::walk::{walk, CommandTree, ScopedName};

/// A source of discovered commands.
pub trait Discover {
    /// What each node points back at.
    type Handle;

    /// Root name prefixed to every rendered path.
    fn program_name(&self) -> String;

    /// Every discovered node, root first, in traversal order.
    fn discover(&self) -> Vec<Node<Self::Handle>>;
}

/// In-process discovery over a [`CommandTree`].
pub struct TreeSource<'a, T> {
    root: &'a T,
}

impl<'a, T: CommandTree> TreeSource<'a, T> {
    pub fn new(root: &'a T) -> Self {
        Self { root }
    }
}

impl<'a, T: CommandTree> Discover for TreeSource<'a, T> {
    type Handle = &'a T;

    fn program_name(&self) -> String {
        self.root.program_name()
    }

    fn discover(&self) -> Vec<Node<&'a T>> {
        walk(self.root).collect()
    }
}

/// External discovery by probing a command line.
pub struct ExternalSource<R: HelpRunner = SystemRunner> {
    command: Vec<String>,
    prober: Prober<R>,
}

impl ExternalSource<SystemRunner> {
    /// Probe `command` with real child processes.
    pub fn new(command: Vec<String>, config: ProbeConfig) -> Result<Self, TotalHelpError> {
        Self::with_prober(command, Prober::new(config))
    }
}

impl<R: HelpRunner> ExternalSource<R> {
    pub fn with_prober(command: Vec<String>, prober: Prober<R>) -> Result<Self, TotalHelpError> {
        if command.is_empty() {
            return Err(TotalHelpError::EmptyCommand);
        }
        Ok(Self { command, prober })
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }
}

impl<R: HelpRunner> Discover for ExternalSource<R> {
    type Handle = ();

    /// The first token of the probed command line.
    fn program_name(&self) -> String {
        self.command.first().cloned().unwrap_or_default()
    }

    fn discover(&self) -> Vec<Node> {
        self.prober.probe(&self.command)
    }
}

/// Discover everything under `source` and render it as one document.
pub fn full_help<D: Discover>(source: &D, format: Format) -> Result<String, TotalHelpError> {
    let nodes = source.discover();
    render(&nodes, &source.program_name(), format)
}

/// Render a full help document for any [`CommandTree`].
///
/// When `prog` is given it replaces the root's display name for the
/// duration of the call; the original is restored afterwards, even if
/// rendering fails.
pub fn full_help_from_tree<T: CommandTree>(
    root: &mut T,
    prog: Option<&str>,
    format: Format,
) -> Result<String, TotalHelpError> {
    let named = ScopedName::acquire(root, prog);
    let doc = full_help(&TreeSource::new(&*named), format);
    doc
}

/// Render a full help document for a clap [`Command`].
///
/// The walk runs over a built copy of `cmd`, so nested usage lines carry
/// the full command path (`Usage: my-app remote add ...`). `cmd` itself
/// keeps its original bin name.
///
/// ```
/// use clap::Command;
/// use totalhelp::{full_help_from_command, Format};
///
/// let mut cmd = Command::new("cli").subcommand(Command::new("init").about("Create things"));
/// let doc = full_help_from_command(&mut cmd, Some("my-app"), Format::Text).unwrap();
///
/// assert!(doc.starts_with("$ my-app --help"));
/// assert!(doc.contains("$ my-app init --help"));
/// assert_eq!(cmd.get_bin_name(), None);
/// ```
pub fn full_help_from_command(
    cmd: &mut Command,
    prog: Option<&str>,
    format: Format,
) -> Result<String, TotalHelpError> {
    let named = ScopedName::acquire(cmd, prog);
    let mut snapshot = (*named).clone();
    // Subcommand usage names are derived from the root's bin name at build.
    snapshot.set_bin_name(snapshot.program_name());
    snapshot.build();
    let doc = full_help(&TreeSource::new(&snapshot), format);
    doc
}

/// Probe an external command line and render everything it exposes.
///
/// `command[0]` is the program; any further tokens are kept as a fixed
/// prefix (`["python", "-m", "pip"]`).
pub fn full_help_external(
    command: &[String],
    format: Format,
    config: &ProbeConfig,
) -> Result<String, TotalHelpError> {
    let source = ExternalSource::new(command.to_vec(), config.clone())?;
    tracing::debug!(command = ?source.command(), "probing external command");
    full_help(&source, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{RunOutcome, ScriptedRunner};

    #[test]
    fn test_external_source_rejects_empty_command() {
        let result = ExternalSource::new(vec![], ProbeConfig::default());
        assert!(matches!(result, Err(TotalHelpError::EmptyCommand)));

        let result = full_help_external(&[], Format::Text, &ProbeConfig::default());
        assert!(matches!(result, Err(TotalHelpError::EmptyCommand)));
    }

    #[test]
    fn test_external_source_uses_first_token_as_name() {
        let runner = ScriptedRunner::new()
            .respond(["python", "-m", "pip", "--help"], RunOutcome::ok("usage: pip"));
        let prober = Prober::with_runner(runner, ProbeConfig::default());
        let command = vec!["python".into(), "-m".into(), "pip".into()];
        let source = ExternalSource::with_prober(command, prober).unwrap();

        assert_eq!(source.program_name(), "python");
        let doc = full_help(&source, Format::Text).unwrap();
        assert_eq!(doc, "$ python --help\n===============\nusage: pip");
    }

    #[test]
    fn test_tree_source_walks_command() {
        let mut cmd = Command::new("cli").subcommand(Command::new("a"));
        cmd.build();
        let source = TreeSource::new(&cmd);
        let nodes = source.discover();

        assert_eq!(source.program_name(), "cli");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].path, vec!["a".to_string()]);
        assert!(nodes[1].handle.is_some_and(|sub| sub.get_name() == "a"));
    }

    #[test]
    fn test_full_help_from_command_restores_bin_name() {
        let mut cmd = Command::new("cli").bin_name("cli-bin");
        let doc = full_help_from_command(&mut cmd, Some("my-app"), Format::Markdown).unwrap();

        assert!(doc.starts_with("# Help for `my-app`"));
        assert_eq!(cmd.get_bin_name(), Some("cli-bin"));
    }

    #[test]
    fn test_full_help_from_command_without_override() {
        let mut cmd = Command::new("cli").subcommand(Command::new("sub").about("Sub"));
        let doc = full_help_from_command(&mut cmd, None, Format::Text).unwrap();

        assert!(doc.starts_with("$ cli --help"));
        assert!(doc.contains("$ cli sub --help"));
        assert!(doc.contains("Usage: cli sub"));
    }
}
