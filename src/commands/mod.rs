//! Command table, dispatch and the board's built-in commands.
//!
//! The shell knows nothing about individual commands. It hands every
//! submitted line to a [`Dispatcher`] and asks the same dispatcher for the
//! [`CommandTable`] it completes against. [`Builtins`] is the dispatcher that
//! ships with the board; an application can wrap it or replace it.
//!
//! Commands report problems by printing a [banner](banner) and carry on. The
//! only error a dispatcher returns is a transport failure, which the shell
//! passes up to its caller.

/// Framed text blocks used for help and error output.
pub mod banner;

/// The board's built-in command set.
pub mod builtin;

/// Terminal colors.
pub mod color;

/// Board collaborator errors.
pub mod error;

/// Firmware properties.
pub mod info;

/// Serial line settings.
pub mod serial;

mod table;

pub use builtin::{BUILTIN_COMMANDS, Builtins};
pub use error::Error;
pub use info::PropertyTag;
pub use serial::SerialConfig;
pub use table::{Command, CommandTable};

use heapless::Vec;

use crate::console::Transport;

/// Most whitespace-separated tokens kept from one line, command name
/// included.
pub const MAX_ARGS: usize = 16;

/// Executes submitted lines.
pub trait Dispatcher {
    /// Commands known to this dispatcher, used for completion.
    fn commands(&self) -> CommandTable;

    /// Run one submitted line.
    ///
    /// `line` is never blank. Output goes to `out`; an error means the
    /// transport failed.
    fn dispatch<T: Transport>(&mut self, line: &str, out: &mut T) -> Result<(), T::Error>;
}

/// Hardware services the built-in commands rely on.
pub trait Platform {
    /// Ask the firmware for a board property.
    fn query(&mut self, tag: PropertyTag) -> Result<[u32; 2], Error>;

    /// Reprogram the serial line.
    fn configure_serial(&mut self, config: &SerialConfig) -> Result<(), Error>;
}

/// A command line split at whitespace.
///
/// # Examples
///
/// ```rust
/// use termshell::commands::Args;
///
/// let args = Args::parse("  setcolor -t  red ");
/// assert_eq!(args.command(), Some("setcolor"));
/// assert_eq!(args.get(2), Some("red"));
/// assert_eq!(args.rest(), ["-t", "red"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Args<'a> {
    tokens: Vec<&'a str, MAX_ARGS>,
}

impl<'a> Args<'a> {
    /// Split `line`. Tokens past [`MAX_ARGS`] are dropped.
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = Vec::new();
        for token in line.split_ascii_whitespace() {
            if tokens.push(token).is_err() {
                break;
            }
        }
        Self { tokens }
    }

    /// The command name, the first token.
    pub fn command(&self) -> Option<&'a str> {
        self.get(0)
    }

    /// Token `index`, counting the command name as 0.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// The arguments after the command name.
    pub fn rest(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or_default()
    }

    /// Number of tokens, command name included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the line had no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
