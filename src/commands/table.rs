//! Static command table.

/// One entry of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Name typed at the prompt. Must not contain spaces.
    pub name: &'static str,
    /// One-line summary shown in the command list.
    pub summary: &'static str,
    /// Long description shown by `help <name>`.
    pub description: &'static str,
}

/// An ordered, immutable list of commands.
///
/// Order matters: it is the order of the help listing and the order in which
/// completion offers candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTable {
    commands: &'static [Command],
}

impl CommandTable {
    /// Wrap a static slice of commands.
    pub const fn new(commands: &'static [Command]) -> Self {
        Self { commands }
    }

    /// Number of commands.
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the table has no commands.
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command at `index`.
    pub fn get(&self, index: usize) -> Option<&'static Command> {
        self.commands.get(index)
    }

    /// Commands in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Command> + use<> {
        self.commands.iter()
    }

    /// The command called exactly `name`.
    pub fn find(&self, name: &str) -> Option<&'static Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Commands whose name starts with `stem`, in table order.
    pub fn prefixed<'a>(&self, stem: &'a str) -> impl Iterator<Item = &'static Command> + use<'a> {
        self.commands
            .iter()
            .filter(move |command| command.name.starts_with(stem))
    }
}
