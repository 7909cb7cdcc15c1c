//! In-process discovery over a known command tree.
//!
//! - [`CommandTree`]: what the walker needs from a command object
//! - [`walk`]: lazy breadth-first traversal yielding [`Node`]s
//! - [`ScopedName`]: temporary root-name override, restored on drop
//!
//! The walker deduplicates by object identity rather than by value, so a
//! command object reachable through two parents is only visited once.

mod clap_tree;
mod scoped;

use std::collections::{HashSet, VecDeque};

use crate::node::Node;

pub use scoped::ScopedName;

/// The structural view of a command that the walker consumes.
///
/// Implemented for [`clap::Command`]. Anything else that can name itself,
/// print its own help and list its children can be walked too.
pub trait CommandTree {
    /// The program name shown in usage lines.
    fn program_name(&self) -> String;

    /// Replace the display-name override and return the previous one.
    ///
    /// Passing `None` clears the override.
    fn replace_program_name(&mut self, name: Option<String>) -> Option<String>;

    /// This command's own help text.
    fn format_help(&self) -> String;

    /// Registered child commands with the name each is registered under.
    fn children(&self) -> Vec<(&str, &Self)>;
}

/// Breadth-first iterator over a command tree. See [`walk`].
pub struct Walk<'a, T> {
    frontier: VecDeque<(Vec<String>, &'a T)>,
    visited: HashSet<*const T>,
    paths: HashSet<Vec<String>>,
}

/// Walk `root` and every command reachable from it, breadth-first.
///
/// The root is yielded first with an empty path. Each child's path is its
/// parent's path plus the name it is registered under. Help text is
/// formatted lazily as each node is yielded.
pub fn walk<T: CommandTree>(root: &T) -> Walk<'_, T> {
    let mut visited = HashSet::new();
    visited.insert(root as *const T);
    let mut paths = HashSet::new();
    paths.insert(Vec::new());

    Walk {
        frontier: VecDeque::from([(Vec::new(), root)]),
        visited,
        paths,
    }
}

impl<'a, T: CommandTree> Iterator for Walk<'a, T> {
    type Item = Node<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, cmd) = self.frontier.pop_front()?;

        for (name, child) in cmd.children() {
            let mut child_path = path.clone();
            child_path.push(name.to_string());

            if self.paths.contains(&child_path) || !self.visited.insert(child as *const T) {
                tracing::debug!(path = ?child_path, "skipping already reached command");
                continue;
            }
            self.paths.insert(child_path.clone());
            self.frontier.push_back((child_path, child));
        }

        Some(Node::with_handle(path, cmd.format_help(), cmd))
    }
}
