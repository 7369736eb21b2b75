//! Errors reported by board collaborators

/// Failures a [`Platform`](super::Platform) can report.
///
/// Commands never propagate these to the shell; they are turned into a
/// banner on the terminal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The board does not provide this property or setting.
    Unsupported,
    /// The firmware or peripheral did not answer in time.
    Timeout,
    /// The hardware reported a fault.
    HardwareFault,
}

impl Error {
    /// Short text shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::Unsupported => "not supported by this board",
            Error::Timeout => "no response from hardware",
            Error::HardwareFault => "hardware fault",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Unsupported => defmt::write!(f, "Unsupported"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::HardwareFault => defmt::write!(f, "HardwareFault"),
        }
    }
}
