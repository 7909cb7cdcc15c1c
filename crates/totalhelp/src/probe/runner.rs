//! Child-process runners used by the prober.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use totalhelp_exec::{run_captured, ExecError};

/// How one help invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The process ran to completion. `output` is stdout followed by stderr.
    Exited { code: Option<i32>, output: String },
    /// The program could not be found.
    NotFound,
    /// The process exceeded its timeout and was killed.
    TimedOut,
    /// Spawning or waiting failed for another reason.
    Failed(String),
}

impl RunOutcome {
    /// A successful run with the given output.
    pub fn ok(output: impl Into<String>) -> Self {
        Self::Exited {
            code: Some(0),
            output: output.into(),
        }
    }

    /// A run that exited with a non-zero code.
    pub fn exit(code: i32, output: impl Into<String>) -> Self {
        Self::Exited {
            code: Some(code),
            output: output.into(),
        }
    }
}

/// Abstraction over help invocation for testability.
pub trait HelpRunner: Send + Sync {
    /// Run `argv` with optional extra environment variables, bounded by
    /// `timeout`.
    fn run(
        &self,
        argv: &[String],
        env: Option<&HashMap<String, String>>,
        timeout: Duration,
    ) -> RunOutcome;
}

/// Real runner that spawns child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl HelpRunner for SystemRunner {
    fn run(
        &self,
        argv: &[String],
        env: Option<&HashMap<String, String>>,
        timeout: Duration,
    ) -> RunOutcome {
        match run_captured(argv, env, Some(timeout)) {
            Ok(captured) => RunOutcome::Exited {
                code: captured.code,
                output: captured.combined(),
            },
            Err(ExecError::NotFound(_)) => RunOutcome::NotFound,
            Err(ExecError::Timeout(_, _)) => RunOutcome::TimedOut,
            Err(e) => RunOutcome::Failed(e.to_string()),
        }
    }
}

/// Scripted runner for testing.
///
/// Replies with a canned outcome per argv and records every call.
/// Unscripted argv vectors behave as if the program did not exist.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<Vec<String>, RunOutcome>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `argv` with `outcome`.
    pub fn respond<I, S>(mut self, argv: I, outcome: RunOutcome) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responses
            .insert(argv.into_iter().map(Into::into).collect(), outcome);
        self
    }

    /// Every argv seen so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HelpRunner for ScriptedRunner {
    fn run(
        &self,
        argv: &[String],
        _env: Option<&HashMap<String, String>>,
        _timeout: Duration,
    ) -> RunOutcome {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(argv.to_vec());
        self.responses
            .get(argv)
            .cloned()
            .unwrap_or(RunOutcome::NotFound)
    }
}
