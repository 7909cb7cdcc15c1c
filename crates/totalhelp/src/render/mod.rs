//! Turning an ordered node list into one document.
//!
//! Every format is a pure function of `(nodes, root_name)`. Nodes are emitted
//! in the order given and never reordered.
//!
//! - [`Format::Text`]: `$ prog sub --help` banners with `=` underlines
//! - [`Format::Markdown`]: one heading and fenced block per command
//! - [`Format::Html`]: a self-contained page with a navigation list

mod html;
mod markdown;
mod text;

use std::fmt;
use std::str::FromStr;

use crate::error::TotalHelpError;
use crate::node::Node;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Text,
    Markdown,
    Html,
}

impl Format {
    /// Canonical names, as accepted on the command line.
    pub const NAMES: [&'static str; 3] = ["text", "md", "html"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Markdown => "md",
            Format::Html => "html",
        }
    }

    /// File extension for a saved document.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Markdown => "md",
            Format::Html => "html",
        }
    }
}

impl FromStr for Format {
    type Err = TotalHelpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "md" | "markdown" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            _ => Err(TotalHelpError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `nodes` as a single document in `format`.
///
/// `root_name` is the program name prefixed to every node's path. Only the
/// HTML renderer can fail, and only if its embedded template does.
pub fn render<H>(
    nodes: &[Node<H>],
    root_name: &str,
    format: Format,
) -> Result<String, TotalHelpError> {
    tracing::debug!(format = %format, nodes = nodes.len(), "rendering");
    match format {
        Format::Text => Ok(text::render(nodes, root_name)),
        Format::Markdown => Ok(markdown::render(nodes, root_name)),
        Format::Html => html::render(nodes, root_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("markdown".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("HTML".parse::<Format>().unwrap(), Format::Html);
    }

    #[test]
    fn test_format_from_str_rejects_unknown() {
        let err = "pdf".parse::<Format>().unwrap_err();
        assert!(matches!(err, TotalHelpError::InvalidFormat(ref f) if f == "pdf"));
    }

    #[test]
    fn test_format_names_round_trip() {
        for name in Format::NAMES {
            let format: Format = name.parse().unwrap();
            assert_eq!(format.as_str(), name);
            assert_eq!(format.to_string(), name);
        }
    }

    #[test]
    fn test_default_is_text() {
        assert_eq!(Format::default(), Format::Text);
    }

    #[test]
    fn test_render_dispatches() {
        let nodes = vec![Node::<()>::new(vec![], "usage: x")];
        assert!(render(&nodes, "x", Format::Text)
            .unwrap()
            .starts_with("$ x --help"));
        assert!(render(&nodes, "x", Format::Markdown)
            .unwrap()
            .starts_with("# Help for `x`"));
        assert!(render(&nodes, "x", Format::Html)
            .unwrap()
            .starts_with("<!DOCTYPE html>"));
    }
}
