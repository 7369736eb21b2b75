//! Character transport between the shell and the terminal.
//!
//! The shell never touches hardware directly. Everything it reads and writes
//! goes through a [`Transport`], which a board support package implements on
//! top of its UART driver (or a test implements on top of a byte queue).
//!
//! Reads are blocking: the shell is driven by one logical thread that waits
//! for the next byte, processes it completely, and only then reads again.
//!
//! # Line endings
//!
//! The provided [`Transport::write_bytes`] and [`Transport::write_str`]
//! methods emit a carriage return before every line feed, so the rest of the
//! crate can write `\n` and still land at column zero on a serial terminal.

/// Common transport error type.
pub mod error;

pub use error::Error;

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;
/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;

/// A blocking, byte-oriented terminal connection.
///
/// # Examples
///
/// ```rust
/// use termshell::console::{Error, Transport};
///
/// struct Loopback {
///     last: Option<u8>,
/// }
///
/// impl Transport for Loopback {
///     type Error = Error;
///
///     fn read_byte(&mut self) -> Result<u8, Self::Error> {
///         self.last.take().ok_or(Error::Disconnected)
///     }
///
///     fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
///         self.last = Some(byte);
///         Ok(())
///     }
/// }
/// ```
pub trait Transport {
    /// The error type reported by the underlying device.
    type Error;

    /// Block until the next byte arrives and return it.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Send a single byte, blocking while the transmitter is busy.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Send a byte sequence, translating `\n` into `\r\n`.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            if byte == ASCII_LF {
                self.write_byte(ASCII_CR)?;
            }
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Send text, translating `\n` into `\r\n`.
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_bytes(text.as_bytes())
    }
}
