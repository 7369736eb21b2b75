#![allow(dead_code)]

use std::collections::VecDeque;

use termshell::commands::{
    Command, CommandTable, Dispatcher, Error, Platform, PropertyTag, SerialConfig,
};
use termshell::console::{self, Transport};

/// In-memory terminal: scripted input, captured output.
#[derive(Debug, Default)]
pub struct MockTerminal {
    input: VecDeque<u8>,
    output: Vec<u8>,
    fail_writes: bool,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Everything written so far, as raw text.
    pub fn raw(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Everything written so far with `\r\n` folded to `\n`.
    pub fn text(&self) -> String {
        self.raw().replace("\r\n", "\n")
    }

    pub fn clear(&mut self) {
        self.output.clear();
    }
}

impl Transport for MockTerminal {
    type Error = console::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.input.pop_front().ok_or(console::Error::Disconnected)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(console::Error::WriteError);
        }
        self.output.push(byte);
        Ok(())
    }
}

const fn command(name: &'static str) -> Command {
    Command {
        name,
        summary: "",
        description: "",
    }
}

pub const RECORDED_COMMANDS: [Command; 5] = [
    command("help"),
    command("clear"),
    command("setcolor"),
    command("showinfo"),
    command("home"),
];

/// Dispatcher that remembers every line it was given and prints nothing.
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<String>,
}

impl Dispatcher for Recorder {
    fn commands(&self) -> CommandTable {
        CommandTable::new(&RECORDED_COMMANDS)
    }

    fn dispatch<T: Transport>(&mut self, line: &str, _out: &mut T) -> Result<(), T::Error> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Board double with canned property answers and a switchable serial fault.
#[derive(Debug, Default)]
pub struct MockBoard {
    pub applied: Vec<SerialConfig>,
    pub serial_fault: Option<Error>,
    pub failing_property: Option<(PropertyTag, Error)>,
}

impl Platform for MockBoard {
    fn query(&mut self, tag: PropertyTag) -> Result<[u32; 2], Error> {
        if let Some((failing, err)) = self.failing_property {
            if failing == tag {
                return Err(err);
            }
        }
        Ok(match tag {
            PropertyTag::MacAddress => [0x2700_1122, 0x0000_b827],
            PropertyTag::BoardRevision => [0x00a0_2082, 0],
            PropertyTag::ArmClockRate => [1_500_000_000, 0],
            PropertyTag::VcMemory => [0x3c00_0000, 0x0400_0000],
            PropertyTag::FirmwareRevision => [1234, 0],
        })
    }

    fn configure_serial(&mut self, config: &SerialConfig) -> Result<(), Error> {
        if let Some(err) = self.serial_fault {
            return Err(err);
        }
        self.applied.push(*config);
        Ok(())
    }
}
