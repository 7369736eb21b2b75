//! Serial line settings.
//!
//! The shell only validates and records settings; programming the UART is up
//! to [`Platform::configure_serial`](super::Platform::configure_serial).

/// Baud rates accepted by `setbaud`.
pub const SUPPORTED_BAUD_RATES: [u32; 12] = [
    300, 1200, 2400, 4800, 9600, 19200, 38400, 57600, 115_200, 230_400, 460_800, 921_600,
];

/// Parity bit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// No parity bit.
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
}

impl Parity {
    /// Name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Parity::None => "none",
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

/// Number of stop bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    /// One stop bit.
    One,
    /// Two stop bits.
    Two,
}

impl StopBits {
    /// Stop bits as a number.
    pub fn count(self) -> u8 {
        match self {
            StopBits::One => 1,
            StopBits::Two => 2,
        }
    }
}

/// Complete serial line configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    /// Line speed in bits per second.
    pub baud_rate: u32,
    /// Data bits per character, 5 to 8.
    pub data_bits: u8,
    /// Stop bits per character.
    pub stop_bits: StopBits,
    /// Parity mode.
    pub parity: Parity,
    /// RTS/CTS hardware flow control.
    pub handshaking: bool,
}

impl Default for SerialConfig {
    /// 115200 baud, 8N1, no flow control.
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            data_bits: 8,
            stop_bits: StopBits::One,
            parity: Parity::None,
            handshaking: false,
        }
    }
}

impl SerialConfig {
    /// A copy of this configuration with one setting changed.
    pub fn with(self, setting: Setting) -> Self {
        let mut config = self;
        match setting {
            Setting::BaudRate(rate) => config.baud_rate = rate,
            Setting::DataBits(bits) => config.data_bits = bits,
            Setting::StopBits(bits) => config.stop_bits = bits,
            Setting::Parity(parity) => config.parity = parity,
            Setting::Handshaking(on) => config.handshaking = on,
        }
        config
    }
}

/// A single validated change to the serial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `setbaud`
    BaudRate(u32),
    /// `setdatabits`
    DataBits(u8),
    /// `setstopbits`
    StopBits(StopBits),
    /// `setparity`
    Parity(Parity),
    /// `sethandshake`
    Handshaking(bool),
}

impl Setting {
    /// Validate `value` for the setter `command`.
    ///
    /// Returns `None` when `command` is not a serial setter or `value` is out
    /// of range.
    pub fn parse(command: &str, value: &str) -> Option<Self> {
        match command {
            "setbaud" => value
                .parse()
                .ok()
                .filter(|rate| SUPPORTED_BAUD_RATES.contains(rate))
                .map(Setting::BaudRate),
            "setdatabits" => value
                .parse()
                .ok()
                .filter(|bits| (5u8..=8).contains(bits))
                .map(Setting::DataBits),
            "setstopbits" => match value {
                "1" => Some(Setting::StopBits(StopBits::One)),
                "2" => Some(Setting::StopBits(StopBits::Two)),
                _ => None,
            },
            "setparity" => match value {
                "none" => Some(Setting::Parity(Parity::None)),
                "even" => Some(Setting::Parity(Parity::Even)),
                "odd" => Some(Setting::Parity(Parity::Odd)),
                _ => None,
            },
            "sethandshake" => match value {
                "on" => Some(Setting::Handshaking(true)),
                "off" => Some(Setting::Handshaking(false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Accepted values for the setter `command`, for error messages.
    pub fn usage(command: &str) -> &'static str {
        match command {
            "setbaud" => {
                "Usage: setbaud <rate>\nSupported rates: 300, 1200, 2400, 4800, 9600, 19200, \
                 38400, 57600, 115200, 230400, 460800, 921600."
            }
            "setdatabits" => "Usage: setdatabits <5-8>",
            "setstopbits" => "Usage: setstopbits <1|2>",
            "setparity" => "Usage: setparity <none|even|odd>",
            "sethandshake" => "Usage: sethandshake <on|off>",
            _ => "Unknown serial setting.",
        }
    }

    /// Human-readable name of the setting.
    pub fn label(&self) -> &'static str {
        match self {
            Setting::BaudRate(_) => "Baud rate",
            Setting::DataBits(_) => "Data bits",
            Setting::StopBits(_) => "Stop bits",
            Setting::Parity(_) => "Parity",
            Setting::Handshaking(_) => "Handshaking",
        }
    }
}
