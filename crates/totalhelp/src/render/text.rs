//! Plain-text rendering.

use crate::node::Node;

/// Width of the rule printed between commands.
pub(crate) const RULE_WIDTH: usize = 78;

pub(super) fn render<H>(nodes: &[Node<H>], root_name: &str) -> String {
    let mut out: Vec<String> = Vec::with_capacity(nodes.len() * 4);

    for (i, node) in nodes.iter().enumerate() {
        let title = format!("$ {} --help", node.label(root_name));
        let underline = "=".repeat(title.chars().count());
        out.push(title);
        out.push(underline);
        out.push(node.help_text.trim().to_string());
        if i + 1 < nodes.len() {
            out.push(format!("\n{}\n", "-".repeat(RULE_WIDTH)));
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<Node> {
        vec![
            Node::new(vec![], "usage: pip <command>\n"),
            Node::new(vec!["install".into()], "  usage: pip install  "),
        ]
    }

    #[test]
    fn test_banner_and_underline() {
        let doc = render(&nodes(), "pip");
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines[0], "$ pip --help");
        assert_eq!(lines[1], "============");
        assert_eq!(lines[2], "usage: pip <command>");
    }

    #[test]
    fn test_separator_only_between_nodes() {
        let doc = render(&nodes(), "pip");
        let rule = "-".repeat(RULE_WIDTH);
        assert_eq!(doc.matches(&rule).count(), 1);
        assert!(doc.ends_with("usage: pip install"));
        assert!(doc.contains(&format!("usage: pip <command>\n\n{rule}\n\n$ pip install --help")));
    }

    #[test]
    fn test_underline_counts_chars() {
        let doc = render(&[Node::<()>::new(vec!["héllo".into()], "x")], "é");
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines[1].len(), lines[0].chars().count());
    }

    #[test]
    fn test_empty_node_list() {
        assert_eq!(render::<()>(&[], "pip"), "");
    }
}
