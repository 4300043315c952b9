use std::collections::HashMap;

use super::TCommand;
use crate::host::HostBot;

/// Stores the `&str -> &dyn Command` mapping for a bot, including aliases.
///
/// The host's command lookup is expected to delegate to
/// [`find_command_by_name`](CommandRegistry::find_command_by_name).
pub struct CommandRegistry<H: HostBot> {
    commands: HashMap<&'static str, TCommand<H>>,
}

impl<H: HostBot> CommandRegistry<H> {
    pub fn new() -> CommandRegistry<H> {
        CommandRegistry {
            commands: HashMap::new(),
        }
    }

    /// Registers a command under its name and each of its aliases.
    pub fn register(&mut self, command: TCommand<H>) {
        let meta = command.metadata();
        self.commands.insert(meta.name, command);
        for alias in meta.aliases {
            self.commands.insert(alias, command);
        }
    }

    /// Finds a command by its name.
    pub fn find_command_by_name(&self, name: &str) -> Option<TCommand<H>> {
        self.commands.get(name).copied()
    }
}

impl<H: HostBot> Default for CommandRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
