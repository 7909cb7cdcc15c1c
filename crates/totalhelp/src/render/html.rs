//! Self-contained HTML rendering via an embedded minijinja template.

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

use crate::error::TotalHelpError;
use crate::node::Node;

const PAGE: &str = include_str!("templates/page.html");
const STYLE: &str = include_str!("templates/style.css");

/// Pixels of navigation indent per path segment.
const INDENT_PX: usize = 20;

#[derive(Debug, Serialize)]
struct Entry {
    anchor: String,
    indent: usize,
    level: usize,
    label: String,
    help: String,
}

impl Entry {
    fn from_node<H>(node: &Node<H>, root_name: &str) -> Self {
        Self {
            anchor: anchor(&node.path),
            indent: node.depth() * INDENT_PX,
            level: (node.depth() + 2).min(6),
            label: node.label(root_name),
            help: escape(node.help_text.trim()),
        }
    }
}

pub(super) fn render<H>(nodes: &[Node<H>], root_name: &str) -> Result<String, TotalHelpError> {
    let mut env = Environment::new();
    // Help text is escaped by hand; only `&`, `<` and `>` are touched.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template("style.css", STYLE)?;
    env.add_template("page.html", PAGE)?;

    let entries: Vec<Entry> = nodes
        .iter()
        .map(|node| Entry::from_node(node, root_name))
        .collect();

    let page = env
        .get_template("page.html")?
        .render(context! { prog => root_name, entries => entries })?;
    Ok(page.trim().to_string())
}

/// Anchor id for a node: `cmd-root`, or `cmd.` plus the dot-joined path.
///
/// Characters outside `[A-Za-z0-9-]` are written as `_<hex>_`, so no two
/// paths share an id.
fn anchor(path: &[String]) -> String {
    if path.is_empty() {
        return "cmd-root".to_string();
    }
    let mut id = String::from("cmd");
    for segment in path {
        id.push('.');
        for c in segment.chars() {
            if c.is_ascii_alphanumeric() || c == '-' {
                id.push(c);
            } else {
                id.push_str(&format!("_{:x}_", u32::from(c)));
            }
        }
    }
    id
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<Node> {
        vec![
            Node::new(vec![], "usage: git <command> [<args>]"),
            Node::new(vec!["remote".into()], "usage: git remote"),
            Node::new(vec!["remote".into(), "add".into()], "a & b \"quoted\" 'single'"),
        ]
    }

    #[test]
    fn test_page_structure() {
        let page = render(&nodes(), "git").unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.ends_with("</html>"));
        assert!(page.contains("<title>Total help for git</title>"));
        assert!(page.contains(".container {"));
    }

    #[test]
    fn test_anchors_and_indent() {
        let page = render(&nodes(), "git").unwrap();
        assert!(page.contains(r##"<li style="margin-left: 0px;"><a href="#cmd-root">git</a></li>"##));
        assert!(page.contains(r##"<li style="margin-left: 40px;"><a href="#cmd.remote.add">git remote add</a></li>"##));
        assert!(page.contains(r#"<h2 id="cmd-root" class="command"><code>git --help</code></h2>"#));
        assert!(page.contains(r#"<h3 id="cmd.remote" class="command"><code>git remote --help</code></h3>"#));
    }

    #[test]
    fn test_escapes_only_amp_lt_gt() {
        let page = render(&nodes(), "git").unwrap();
        assert!(page.contains("<pre>usage: git &lt;command&gt; [&lt;args&gt;]</pre>"));
        assert!(page.contains("<pre>a &amp; b \"quoted\" 'single'</pre>"));
    }

    #[test]
    fn test_escape_order() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor(&[]), "cmd-root");
        assert_eq!(anchor(&["a".into(), "b".into()]), "cmd.a.b");
        assert_eq!(anchor(&["a-b".into()]), "cmd.a-b");
        assert_eq!(anchor(&["root".into()]), "cmd.root");
        assert_eq!(anchor(&["a.b".into()]), "cmd.a_2e_b");
        assert_eq!(anchor(&["say \"hi\"".into()]), "cmd.say_20__22_hi_22_");
    }
}
