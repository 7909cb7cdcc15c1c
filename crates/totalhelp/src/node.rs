//! The unit of discovery shared by every source and renderer.

use std::hash::{Hash, Hasher};

/// One discovered command: its path from the root plus its help text.
///
/// `handle` points back at the structural object the node came from. It is
/// `None` for externally probed nodes, which have nothing to point at.
///
/// Equality and hashing look at `path` only. Two nodes with the same path
/// describe the same command regardless of their help text.
#[derive(Debug, Clone)]
pub struct Node<H = ()> {
    /// Command tokens from the root to this node. Empty for the root.
    pub path: Vec<String>,
    pub help_text: String,
    pub handle: Option<H>,
}

impl<H> Node<H> {
    /// Create a node with no underlying handle.
    pub fn new(path: Vec<String>, help_text: impl Into<String>) -> Self {
        Self {
            path,
            help_text: help_text.into(),
            handle: None,
        }
    }

    pub fn with_handle(path: Vec<String>, help_text: impl Into<String>, handle: H) -> Self {
        Self {
            path,
            help_text: help_text.into(),
            handle: Some(handle),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The program name followed by the path tokens, space separated.
    pub fn label(&self, root_name: &str) -> String {
        std::iter::once(root_name)
            .chain(self.path.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<H> PartialEq for Node<H> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<H> Eq for Node<H> {}

impl<H> Hash for Node<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.path.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn path(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equality_ignores_help_text() {
        let a: Node = Node::new(path(&["remote", "add"]), "one");
        let b: Node = Node::new(path(&["remote", "add"]), "two");
        assert_eq!(a, b);

        let set: HashSet<Node> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_label() {
        let root: Node = Node::new(vec![], "");
        assert_eq!(root.label("git"), "git");
        assert!(root.is_root());

        let child: Node = Node::new(path(&["remote", "add"]), "");
        assert_eq!(child.label("git"), "git remote add");
        assert_eq!(child.depth(), 2);
    }
}
