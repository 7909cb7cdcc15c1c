//! External discovery by recursively invoking `<command> --help`.
//!
//! The prober starts at the base command, runs it with the help flag, and
//! feeds the captured text through the [`Extractor`] to find subcommands.
//! Each discovered name is probed in turn, breadth-first, up to
//! [`ProbeConfig::max_depth`].
//!
//! Nothing that happens to a single child process stops the run:
//!
//! | Outcome          | Recorded help text                     | Expanded |
//! |------------------|----------------------------------------|----------|
//! | exit 0           | captured output                        | yes      |
//! | non-zero exit    | warning banner + captured output       | yes      |
//! | not found        | `[Error: command not found: '...']`    | no       |
//! | timeout          | `[Error: command timed out after ...]` | no       |
//! | other failure    | `[Error: an unexpected error ...]`     | no       |
//!
//! # Example
//!
//! ```ignore
//! use totalhelp::{ProbeConfig, Prober};
//!
//! let prober = Prober::new(ProbeConfig::default().with_max_depth(2));
//! let nodes = prober.probe(&["cargo".to_string()]);
//! ```

mod config;
mod runner;

use std::collections::{HashSet, VecDeque};

use crate::extract::Extractor;
use crate::node::Node;

pub use config::ProbeConfig;
pub use runner::{HelpRunner, RunOutcome, ScriptedRunner, SystemRunner};

/// Breadth-first prober over an external command's help output.
#[derive(Debug)]
pub struct Prober<R: HelpRunner = SystemRunner> {
    runner: R,
    extractor: Extractor,
    config: ProbeConfig,
}

impl Prober<SystemRunner> {
    /// Create a prober that spawns real child processes.
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_runner(SystemRunner, config)
    }
}

impl<R: HelpRunner> Prober<R> {
    /// Create a prober with a custom runner.
    ///
    /// Primarily used for testing to script child process replies.
    pub fn with_runner(runner: R, config: ProbeConfig) -> Self {
        Self {
            runner,
            extractor: Extractor::default(),
            config,
        }
    }

    /// Replace the default extraction chain.
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe `base_command` and everything discoverable beneath it.
    ///
    /// The root node (empty path) is always first. Paths are unique and never
    /// longer than `max_depth`.
    pub fn probe(&self, base_command: &[String]) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut frontier: VecDeque<Vec<String>> = VecDeque::from([Vec::new()]);
        let mut visited: HashSet<Vec<String>> = HashSet::new();

        while let Some(path) = frontier.pop_front() {
            if path.len() > self.config.max_depth {
                tracing::debug!(path = ?path, max_depth = self.config.max_depth, "beyond max depth");
                continue;
            }
            if !visited.insert(path.clone()) {
                continue;
            }

            let mut argv = base_command.to_vec();
            argv.extend(path.iter().cloned());
            let (help_text, expand) = self.invoke(&argv);

            if expand {
                for name in self.extractor.extract(&help_text) {
                    let mut child = path.clone();
                    child.push(name);
                    if !visited.contains(&child) {
                        frontier.push_back(child);
                    }
                }
            }

            nodes.push(Node::new(path, help_text.trim()));
        }

        tracing::debug!(count = nodes.len(), "probe finished");
        nodes
    }

    /// Run one help invocation. Returns the help text and whether the node
    /// may be expanded further.
    fn invoke(&self, argv: &[String]) -> (String, bool) {
        let mut full = argv.to_vec();
        full.push(self.config.help_flag.clone());
        tracing::debug!(argv = ?full, "probing");

        match self
            .runner
            .run(&full, self.config.env.as_ref(), self.config.timeout)
        {
            RunOutcome::Exited {
                code: Some(0),
                output,
            } => (output, true),
            RunOutcome::Exited { code, output } => {
                let code = code.map_or_else(|| "unknown".to_string(), |c| c.to_string());
                tracing::debug!(argv = ?full, code = %code, "help exited non-zero");
                (
                    format!("[Warning: command exited with code {code}]\n\n{output}"),
                    true,
                )
            }
            RunOutcome::NotFound => {
                tracing::warn!(argv = ?full, "command not found");
                (
                    format!("[Error: command not found: '{}']", argv.join(" ")),
                    false,
                )
            }
            RunOutcome::TimedOut => {
                tracing::warn!(argv = ?full, timeout = ?self.config.timeout, "help timed out");
                (
                    format!(
                        "[Error: command timed out after {} seconds]",
                        self.config.timeout.as_secs_f64()
                    ),
                    false,
                )
            }
            RunOutcome::Failed(reason) => {
                tracing::warn!(argv = ?full, reason = %reason, "help invocation failed");
                (
                    format!("[Error: an unexpected error occurred: {reason}]"),
                    false,
                )
            }
        }
    }
}

/// Probe `base_command` with real child processes.
pub fn probe(base_command: &[String], config: &ProbeConfig) -> Vec<Node> {
    Prober::new(config.clone()).probe(base_command)
}
