//! [`CommandTree`] for clap commands.

use clap::builder::Resettable;
use clap::Command;

use super::CommandTree;

/// The name under which clap registers its generated help subcommand.
const GENERATED_HELP: &str = "help";

impl CommandTree for Command {
    fn program_name(&self) -> String {
        self.get_bin_name()
            .unwrap_or_else(|| self.get_name())
            .to_string()
    }

    fn replace_program_name(&mut self, name: Option<String>) -> Option<String> {
        let previous = self.get_bin_name().map(str::to_owned);
        match name {
            Some(name) => self.set_bin_name(name),
            None => *self = std::mem::take(self).bin_name(Resettable::<String>::Reset),
        }
        previous
    }

    /// Plain help text, without ANSI styling.
    ///
    /// Nested usage lines only include parent names once the tree has been
    /// built; [`full_help_from_command`](crate::full_help_from_command)
    /// walks a built snapshot for that reason.
    fn format_help(&self) -> String {
        self.clone().render_help().to_string()
    }

    /// Visible subcommands, minus clap's generated `help` subcommand.
    fn children(&self) -> Vec<(&str, &Self)> {
        self.get_subcommands()
            .filter(|sub| !sub.is_hide_set())
            .filter(|sub| !is_generated_help(self, sub))
            .map(|sub| (sub.get_name(), sub))
            .collect()
    }
}

fn is_generated_help(parent: &Command, sub: &Command) -> bool {
    !parent.is_disable_help_subcommand_set() && sub.get_name() == GENERATED_HELP
}
