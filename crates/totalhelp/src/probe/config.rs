//! Probe configuration.

use std::collections::HashMap;
use std::time::Duration;

/// Settings for one external probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Deepest path length that is still invoked. `0` probes the root only.
    pub max_depth: usize,
    /// Wall-clock limit for each child invocation.
    pub timeout: Duration,
    /// Extra environment variables for every child, layered over the
    /// inherited environment.
    pub env: Option<HashMap<String, String>>,
    /// Flag appended to every invocation to request help.
    pub help_flag: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            timeout: Duration::from_secs(5),
            env: None,
            help_flag: "--help".to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Use a different help flag, e.g. `-h` or `help`.
    pub fn with_help_flag(mut self, flag: impl Into<String>) -> Self {
        self.help_flag = flag.into();
        self
    }
}
