//! # termshell - interactive shell for bare-metal boards
//!
//! An interactive command shell that runs over a serial terminal on a
//! single-board computer without an operating system. The crate supports
//! `no_std` environments and never allocates: every buffer has a fixed,
//! compile-time capacity.
//!
//! ## Features
//!
//! ### Line editor
//! - Character-at-a-time editing with echo and backspace
//! - Bounded command history with recall keys
//! - Tab completion with cycling through ambiguous matches
//!
//! ### Output
//! - A small `printf`-style renderer (`%d %x %c %s %f`, width, zero padding,
//!   precision) used for all terminal output
//! - Framed banners for help screens and errors
//!
//! ### Commands
//! - A pluggable dispatcher with a static command table
//! - Built-in board commands: help, screen clearing, terminal colors, board
//!   information and serial line settings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use termshell::commands::{Builtins, Error, Platform, PropertyTag, SerialConfig};
//! use termshell::console::{self, Transport};
//! use termshell::shell::Shell;
//!
//! # struct Uart;
//! # impl Transport for Uart {
//! #     type Error = console::Error;
//! #     fn read_byte(&mut self) -> Result<u8, Self::Error> { Err(console::Error::Disconnected) }
//! #     fn write_byte(&mut self, _byte: u8) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! struct Board;
//!
//! impl Platform for Board {
//!     fn query(&mut self, _tag: PropertyTag) -> Result<[u32; 2], Error> {
//!         Err(Error::Unsupported)
//!     }
//!
//!     fn configure_serial(&mut self, _config: &SerialConfig) -> Result<(), Error> {
//!         Ok(())
//!     }
//! }
//!
//! let mut uart = Uart;
//! let mut shell = Shell::new(Builtins::new(Board));
//! let _ = shell.run(&mut uart);
//! ```
//!
//! ## Optional Features
//!
//! - `defmt`: Enable defmt logging of shell events for embedded debugging

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

mod log;

/// Character transport between the shell and the terminal.
///
/// Defines the [`Transport`](console::Transport) trait a board implements on
/// top of its UART driver.
pub mod console;

/// printf-style formatting of terminal output.
pub mod render;

/// The line editor, command history and tab completion.
pub mod shell;

/// Command table, dispatcher trait and the built-in board commands.
pub mod commands;
