//! Board properties reported by `showinfo`.

/// A property the board firmware can be asked for.
///
/// Every query answers with two words. Unless noted otherwise the value is in
/// the first word and the second is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTag {
    /// Ethernet MAC address, packed as described in [`MacAddress::from_words`].
    MacAddress,
    /// Board revision code.
    BoardRevision,
    /// ARM core clock rate in Hz.
    ArmClockRate,
    /// VideoCore memory split: base address, then size in bytes.
    VcMemory,
    /// Firmware revision.
    FirmwareRevision,
}

impl PropertyTag {
    /// Mailbox property tag identifier.
    pub const fn id(self) -> u32 {
        match self {
            PropertyTag::MacAddress => 0x0001_0003,
            PropertyTag::BoardRevision => 0x0001_0002,
            PropertyTag::ArmClockRate => 0x0003_0002,
            PropertyTag::VcMemory => 0x0001_0006,
            PropertyTag::FirmwareRevision => 0x0000_0001,
        }
    }

    /// Label printed in front of the value.
    pub fn label(self) -> &'static str {
        match self {
            PropertyTag::MacAddress => "Board MAC address",
            PropertyTag::BoardRevision => "Board revision",
            PropertyTag::ArmClockRate => "ARM clock rate",
            PropertyTag::VcMemory => "VC memory",
            PropertyTag::FirmwareRevision => "Firmware revision",
        }
    }
}

/// Properties printed by `showinfo`, in order.
pub const SHOWINFO_PROPERTIES: [PropertyTag; 5] = [
    PropertyTag::MacAddress,
    PropertyTag::BoardRevision,
    PropertyTag::ArmClockRate,
    PropertyTag::VcMemory,
    PropertyTag::FirmwareRevision,
];

/// A six-byte hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Unpack the two response words of a [`PropertyTag::MacAddress`] query.
    ///
    /// The first two bytes come from the low half of the second word, high
    /// byte first; the remaining four are the first word, high byte first.
    pub fn from_words(words: [u32; 2]) -> Self {
        let [low, high] = words;
        let high = high.to_be_bytes();
        let low = low.to_be_bytes();
        Self([high[2], high[3], low[0], low[1], low[2], low[3]])
    }
}
