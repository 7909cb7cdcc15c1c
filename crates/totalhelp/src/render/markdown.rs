//! Markdown rendering.

use crate::node::Node;

pub(super) fn render<H>(nodes: &[Node<H>], root_name: &str) -> String {
    let mut out = vec![format!("# Help for `{root_name}`\n")];

    for node in nodes {
        let level = (node.depth() + 2).min(6);
        out.push(format!("{} `{}`\n", "#".repeat(level), node.label(root_name)));
        out.push("```text".to_string());
        out.push(node.help_text.trim().to_string());
        out.push("```\n".to_string());
    }

    out.join("\n")
}
