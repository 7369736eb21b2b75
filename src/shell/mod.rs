//! Interactive line editor and shell loop.
//!
//! A [`Shell`] is one terminal session. It owns everything that survives
//! between keystrokes: the line being edited, the command history, the
//! completion state and the command dispatcher. Input is consumed one byte at
//! a time through [`Shell::step`], and every byte is fully processed, echo
//! included, before the next one is looked at, so what the terminal shows
//! always matches the edit buffer.
//!
//! # Keys
//!
//! | Byte              | Effect                                           |
//! |-------------------|--------------------------------------------------|
//! | printable ASCII   | append to the line and echo                      |
//! | `0x08`, `0x7F`    | delete the last character                        |
//! | `\t`              | complete the word under the cursor               |
//! | `_`               | recall an older history entry                    |
//! | `+`               | recall a newer history entry                     |
//! | `\r`, `\n`        | submit the line (`\r\n` counts once)             |
//!
//! The completion and history keys are configurable through [`KeyMap`]. With
//! the defaults, `_` and `+` cannot be typed as part of a command.
//!
//! A line that reaches [`LINE_CAPACITY`]` - 1` characters is submitted as if
//! the user had pressed Enter.
//!
//! # Examples
//!
//! ```rust
//! use termshell::commands::{Command, CommandTable, Dispatcher};
//! use termshell::console::{Error, Transport};
//! use termshell::shell::Shell;
//!
//! struct Screen(Vec<u8>);
//!
//! impl Transport for Screen {
//!     type Error = Error;
//!     fn read_byte(&mut self) -> Result<u8, Error> {
//!         Err(Error::Disconnected)
//!     }
//!     fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
//!         self.0.push(byte);
//!         Ok(())
//!     }
//! }
//!
//! struct Ping;
//!
//! const COMMANDS: &[Command] = &[Command {
//!     name: "ping",
//!     summary: "Answer with pong.",
//!     description: "Prints pong.",
//! }];
//!
//! impl Dispatcher for Ping {
//!     fn commands(&self) -> CommandTable {
//!         CommandTable::new(COMMANDS)
//!     }
//!
//!     fn dispatch<T: Transport>(&mut self, _line: &str, out: &mut T) -> Result<(), T::Error> {
//!         out.write_str("pong\n")
//!     }
//! }
//!
//! let mut screen = Screen(Vec::new());
//! let mut shell = Shell::new(Ping);
//! for &byte in b"pi\t\r" {
//!     shell.step(byte, &mut screen).unwrap();
//! }
//! assert_eq!(shell.history().get(0), Some("ping"));
//! ```

pub mod buffer;
pub mod complete;
pub mod history;

pub use buffer::EditBuffer;
pub use complete::{Completer, Outcome};
pub use history::History;

use crate::commands::Dispatcher;
use crate::console::{ASCII_BACKSPACE, ASCII_CR, ASCII_DEL, ASCII_LF, Transport};
use crate::log::debug;
use crate::tprintf;

/// Capacity of the edit line, terminator included.
pub const LINE_CAPACITY: usize = 100;

/// Number of submitted lines remembered.
pub const HISTORY_DEPTH: usize = 20;

/// Prompt used by [`ShellConfig::default`].
pub const DEFAULT_PROMPT: &str = "shell> ";

const ERASE_GLYPH: &[u8] = b"\x08 \x08";

/// What a single input byte means to the line editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A character to append to the line.
    Printable(u8),
    /// Delete the character before the cursor.
    Erase,
    /// Complete the word under the cursor.
    Complete,
    /// Recall the previous (older) history entry.
    Older,
    /// Recall the next (newer) history entry.
    Newer,
    /// Submit the line.
    Submit,
    /// A byte the editor has no use for.
    Ignored,
}

/// Bytes bound to the editor's special keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    /// Requests completion. Defaults to tab.
    pub complete: u8,
    /// Steps back through history. Defaults to `_`.
    pub history_older: u8,
    /// Steps forward through history. Defaults to `+`.
    pub history_newer: u8,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            complete: b'\t',
            history_older: b'_',
            history_newer: b'+',
        }
    }
}

impl KeyMap {
    /// Decide what `byte` does. Bound keys take precedence over their usual
    /// meaning.
    pub fn classify(&self, byte: u8) -> Key {
        match byte {
            b if b == self.complete => Key::Complete,
            b if b == self.history_older => Key::Older,
            b if b == self.history_newer => Key::Newer,
            ASCII_CR | ASCII_LF => Key::Submit,
            ASCII_BACKSPACE | ASCII_DEL => Key::Erase,
            0x20..=0x7E => Key::Printable(byte),
            _ => Key::Ignored,
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Text printed in front of every input line.
    pub prompt: &'static str,
    /// Whether typed characters, erasures and recalled lines are echoed.
    /// Prompts, completion listings and command output are printed either
    /// way.
    pub echo: bool,
    /// Special key bindings.
    pub keys: KeyMap,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT,
            echo: true,
            keys: KeyMap::default(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Older,
    Newer,
}

/// One interactive terminal session.
#[derive(Debug)]
pub struct Shell<D: Dispatcher> {
    line: EditBuffer<LINE_CAPACITY>,
    history: History<LINE_CAPACITY, HISTORY_DEPTH>,
    completer: Completer,
    dispatcher: D,
    config: ShellConfig,
    after_cr: bool,
}

impl<D: Dispatcher> Shell<D> {
    /// Create a session with the default configuration.
    pub fn new(dispatcher: D) -> Self {
        Self::with_config(dispatcher, ShellConfig::default())
    }

    /// Create a session with a custom prompt, echo setting or key map.
    pub fn with_config(dispatcher: D, config: ShellConfig) -> Self {
        Self {
            line: EditBuffer::new(),
            history: History::new(),
            completer: Completer::new(),
            dispatcher,
            config,
            after_cr: false,
        }
    }

    /// Print the first prompt.
    pub fn start<T: Transport>(&mut self, out: &mut T) -> Result<(), T::Error> {
        out.write_str(self.config.prompt)
    }

    /// Read and process bytes from `io` until it reports an error.
    ///
    /// This is the firmware main loop: it only returns when the transport
    /// fails, handing that error back to the caller.
    pub fn run<T: Transport>(&mut self, io: &mut T) -> Result<(), T::Error> {
        self.start(io)?;
        loop {
            let byte = io.read_byte()?;
            self.step(byte, io)?;
        }
    }

    /// Process one input byte, writing its visible effect to `out`.
    pub fn step<T: Transport>(&mut self, byte: u8, out: &mut T) -> Result<(), T::Error> {
        let after_cr = core::mem::replace(&mut self.after_cr, byte == ASCII_CR);
        if byte == ASCII_LF && after_cr {
            return Ok(());
        }

        let key = self.config.keys.classify(byte);

        // Editing a recalled line makes it the new live line; the next
        // history step starts over from the newest entry.
        if self.history.is_browsing() && !matches!(key, Key::Older | Key::Newer) {
            self.history.exit_browsing();
        }
        if key != Key::Complete {
            self.completer.break_cycle();
        }

        match key {
            Key::Printable(byte) => {
                if self.line.push(byte) {
                    self.echo(out, &[byte])?;
                }
                if self.line.is_full() {
                    self.submit(out)?;
                }
            }
            Key::Erase => {
                if self.line.pop().is_some() {
                    self.echo(out, ERASE_GLYPH)?;
                }
            }
            Key::Complete => self.complete(out)?,
            Key::Older => self.recall(Direction::Older, out)?,
            Key::Newer => self.recall(Direction::Newer, out)?,
            Key::Submit => self.submit(out)?,
            Key::Ignored => {}
        }

        Ok(())
    }

    /// The line being edited.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Submitted lines.
    pub fn history(&self) -> &History<LINE_CAPACITY, HISTORY_DEPTH> {
        &self.history
    }

    /// Session settings.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The command dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// The command dispatcher, mutably.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    fn echo<T: Transport>(&self, out: &mut T, bytes: &[u8]) -> Result<(), T::Error> {
        if self.config.echo {
            out.write_bytes(bytes)?;
        }
        Ok(())
    }

    fn submit<T: Transport>(&mut self, out: &mut T) -> Result<(), T::Error> {
        self.echo(out, b"\n")?;

        let dispatched = if self.line.is_blank() {
            Ok(())
        } else {
            debug!("submit: {=str}", self.line.as_str());
            let result = self.dispatcher.dispatch(self.line.as_str(), out);
            self.history.append(self.line.as_str());
            result
        };
        self.line.clear();
        dispatched?;

        out.write_str(self.config.prompt)
    }

    fn complete<T: Transport>(&mut self, out: &mut T) -> Result<(), T::Error> {
        let table = self.dispatcher.commands();
        let outcome = self.completer.complete(&mut self.line, &table);

        if let Outcome::Ambiguous { index, stem_len } = outcome {
            let stem = table.get(index).map_or("", |command| &command.name[..stem_len]);
            out.write_str("\nPossible commands:\n")?;
            for command in table.prefixed(stem) {
                tprintf!(out, "- %s\n", command.name)?;
            }
        }

        tprintf!(out, "\r%s%s", self.config.prompt, self.line.as_str())
    }

    fn recall<T: Transport>(&mut self, direction: Direction, out: &mut T) -> Result<(), T::Error> {
        let shown = self.line.len();
        let entry = match direction {
            Direction::Older => self.history.older(self.line.as_str()),
            Direction::Newer => self.history.newer(),
        };
        let Some(entry) = entry else {
            return Ok(());
        };
        self.line.replace(entry);

        if self.config.echo {
            for _ in 0..shown {
                out.write_bytes(ERASE_GLYPH)?;
            }
            out.write_str(self.line.as_str())?;
        }
        Ok(())
    }
}
