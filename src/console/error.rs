//! Common error type for character transports

/// A common error type for terminal transports.
///
/// Transport implementations are free to use their own error type; this one
/// covers the failures a UART or host pipe typically reports and is kept
/// simple and portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The other end of the line went away (end of input on a host pipe).
    Disconnected,
    /// An error occurred while receiving a byte.
    ReadError,
    /// An error occurred while transmitting a byte.
    WriteError,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Disconnected => defmt::write!(f, "Disconnected"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
        }
    }
}
