//! Heuristic subcommand extraction from free-form help text.
//!
//! Help output has no guaranteed structure, so extraction is a best-effort
//! chain of independent [`Strategy`] implementations. The [`Extractor`] tries
//! each strategy in order and returns the first non-empty result.
//!
//! ```text
//! Extractor
//! ├── UsageBraces     → []              (no `{a,b}` group outside `[...]`)
//! ├── LabeledSection  → ["build", ...]  ← returns this
//! └── ...             → (not reached)
//! ```
//!
//! # Example
//!
//! ```
//! let text = "usage: git [-v | --version] {clone,init,add}";
//! assert_eq!(totalhelp::extract(text), vec!["clone", "init", "add"]);
//! ```

mod section;
mod usage;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;

pub use section::LabeledSection;
pub use usage::UsageBraces;

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(Extractor::default);

/// A single way of finding subcommand names in help text.
pub trait Strategy: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Candidate names in first-seen order. Empty when nothing was found.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// An ordered chain of strategies, short-circuiting on the first hit.
pub struct Extractor {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Extractor {
    /// Create an extractor with no strategies. It always returns nothing.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy to the chain.
    pub fn with_strategy<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Run the chain over `text`.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text = normalize_newlines(text);
        for strategy in &self.strategies {
            let found = strategy.extract(&text);
            if !found.is_empty() {
                tracing::debug!(
                    strategy = strategy.name(),
                    count = found.len(),
                    "extracted subcommands"
                );
                return found;
            }
        }
        Vec::new()
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}

impl Default for Extractor {
    /// Usage-line braces first, then labeled sections.
    fn default() -> Self {
        Self::new()
            .with_strategy(UsageBraces)
            .with_strategy(LabeledSection)
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Extract subcommand names using the default strategy chain.
pub fn extract(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(text)
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Drop repeats while keeping first-appearance order.
pub(crate) fn dedup_in_order(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
