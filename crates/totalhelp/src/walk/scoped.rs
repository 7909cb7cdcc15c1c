use std::ops::Deref;

use super::CommandTree;

/// Temporarily overrides the display name of a command tree's root.
///
/// The previous value is saved on [`acquire`](Self::acquire) and put back
/// when the guard is dropped, including when a panic unwinds through it.
/// With no override requested the root is left untouched.
///
/// # Example
///
/// ```
/// use clap::Command;
/// use totalhelp::{CommandTree, ScopedName};
///
/// let mut cmd = Command::new("cli");
/// {
///     let named = ScopedName::acquire(&mut cmd, Some("my-app"));
///     assert_eq!(named.program_name(), "my-app");
/// }
/// assert_eq!(cmd.program_name(), "cli");
/// ```
pub struct ScopedName<'a, T: CommandTree> {
    root: &'a mut T,
    previous: Option<Option<String>>,
}

impl<'a, T: CommandTree> ScopedName<'a, T> {
    pub fn acquire(root: &'a mut T, name: Option<&str>) -> Self {
        let previous = name.map(|name| root.replace_program_name(Some(name.to_string())));
        Self { root, previous }
    }

    /// Whether an override is currently applied.
    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }
}

impl<T: CommandTree> Deref for ScopedName<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.root
    }
}

impl<T: CommandTree> Drop for ScopedName<'_, T> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.root.replace_program_name(previous);
        }
    }
}
