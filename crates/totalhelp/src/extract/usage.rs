//! Usage-line brace strategy.
//!
//! Argparse-style usage lines name the subcommand choice set as a brace group,
//! e.g. `usage: git [-v] {clone,init}`. Flag choice sets such as
//! `[--mode {a,b}]` live inside optional groups, so those are removed before
//! looking for braces.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{dedup_in_order, Strategy};

static USAGE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^usage:").expect("usage pattern is valid"));

/// An optional group with no nested brackets inside it.
static INNERMOST_OPTIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\[\]]*\]").expect("optional-group pattern is valid"));

static CHOICE_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([\w,-]+)\}").expect("choice-group pattern is valid"));

/// Finds the `{a,b,c}` subcommand group of the first usage block.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsageBraces;

impl Strategy for UsageBraces {
    fn name(&self) -> &'static str {
        "usage-braces"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        let Some(block) = usage_block(text) else {
            return Vec::new();
        };
        let line = block.split_whitespace().collect::<Vec<_>>().join(" ");
        let required = strip_optional_groups(&line);

        match CHOICE_GROUP.captures(&required) {
            Some(caps) => dedup_in_order(
                caps[1]
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(String::from),
            ),
            None => Vec::new(),
        }
    }
}

/// The first block starting with `usage:` at a line start, up to the first
/// blank line or the end of the text.
fn usage_block(text: &str) -> Option<&str> {
    let start = USAGE_START.find(text)?.start();
    let rest = &text[start..];
    let end = rest.find("\n\n").unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Remove `[...]` spans innermost-first until none are left.
fn strip_optional_groups(line: &str) -> String {
    let mut current = line.to_string();
    loop {
        let next = INNERMOST_OPTIONAL.replace_all(&current, "").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_usage_line() {
        let text = "usage: git [-v | --version] {clone,init,add,mv,reset,rm,bisect,grep}";
        assert_eq!(
            UsageBraces.extract(text),
            vec!["clone", "init", "add", "mv", "reset", "rm", "bisect", "grep"]
        );
    }

    #[test]
    fn flag_choices_inside_optional_groups_are_ignored() {
        let text = "usage: tool [-h] [--demo {pipx,venv,npm}]\n            {run,stop} ...\n";
        assert_eq!(UsageBraces.extract(text), vec!["run", "stop"]);
    }

    #[test]
    fn nested_optional_groups_are_removed() {
        let text = "usage: tool [--color [{auto,never}]] {build,test}";
        assert_eq!(UsageBraces.extract(text), vec!["build", "test"]);
    }

    #[test]
    fn usage_is_case_insensitive() {
        let text = "Usage: tool {a,b}";
        assert_eq!(UsageBraces.extract(text), vec!["a", "b"]);
    }

    #[test]
    fn block_stops_at_blank_line() {
        let text = "usage: tool <command>\n\nSee also {x,y}";
        assert!(UsageBraces.extract(text).is_empty());
    }

    #[test]
    fn only_optional_choices_yields_nothing() {
        let text = "usage: tool [--mode {fast,slow}] FILE";
        assert!(UsageBraces.extract(text).is_empty());
    }

    #[test]
    fn usage_must_start_a_line() {
        let text = "see usage: tool {a,b}";
        assert!(UsageBraces.extract(text).is_empty());
    }

    #[test]
    fn strip_optional_groups_innermost_first() {
        assert_eq!(strip_optional_groups("a [b [c] d] e"), "a  e");
        assert_eq!(strip_optional_groups("no groups"), "no groups");
    }
}
