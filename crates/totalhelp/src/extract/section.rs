//! Labeled-section strategy.
//!
//! Many CLIs list their subcommands under a header such as `Commands:`, one
//! indented entry per line with the name in the first column.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{dedup_in_order, Strategy};

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:commands|subcommands|available commands|positional arguments):")
        .expect("section header pattern is valid")
});

/// Indentation, then the leading word-with-hyphens run of the first token.
static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s+)(\w[\w-]*)").expect("entry pattern is valid"));

/// Collects the first token of each entry in a `Commands:`-style section.
///
/// A section ends at a blank line or at a line with no leading whitespace.
/// Restated choice sets (`{a,b}`) are skipped. Entries sit at the shallowest
/// indentation seen in the section; deeper lines are wrapped descriptions.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabeledSection;

impl Strategy for LabeledSection {
    fn name(&self) -> &'static str {
        "labeled-section"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut section: Option<Vec<(usize, String)>> = None;

        for line in text.lines() {
            if HEADER.is_match(line) {
                flush(section.replace(Vec::new()), &mut names);
                continue;
            }
            let Some(entries) = section.as_mut() else {
                continue;
            };
            if line.trim().is_empty() || !line.starts_with([' ', '\t']) {
                flush(section.take(), &mut names);
                continue;
            }
            if line.trim_start().starts_with('{') {
                continue;
            }
            if let Some(caps) = ENTRY.captures(line) {
                entries.push((caps[1].len(), caps[2].to_string()));
            }
        }
        flush(section, &mut names);

        dedup_in_order(names)
    }
}

/// Keep the candidates at the section's entry column.
fn flush(section: Option<Vec<(usize, String)>>, names: &mut Vec<String>) {
    let Some(entries) = section else {
        return;
    };
    let Some(column) = entries.iter().map(|(indent, _)| *indent).min() else {
        return;
    };
    names.extend(
        entries
            .into_iter()
            .filter(|(indent, _)| *indent == column)
            .map(|(_, name)| name),
    );
}
