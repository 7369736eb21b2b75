//! Built-in board commands.

use super::banner;
use super::color::ColorRequest;
use super::info::{MacAddress, PropertyTag, SHOWINFO_PROPERTIES};
use super::serial::{SerialConfig, Setting};
use super::{Args, Command, CommandTable, Dispatcher, Platform};
use crate::console::Transport;
use crate::log::{debug, warning};
use crate::tprintf;

/// Width of the command list box.
const HELP_WIDTH: usize = 61;
/// Width of the unknown command box.
const INVALID_WIDTH: usize = 42;
/// Width of the unknown `help` topic box.
const NOT_FOUND_WIDTH: usize = 31;
/// Width of board information and settings boxes.
const WIDE: usize = 64;

const NAME_COLUMN: usize = 13;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// The commands [`Builtins`] understands, in help order.
pub const BUILTIN_COMMANDS: [Command; 11] = [
    Command {
        name: "help",
        summary: "Display a list of available commands.",
        description: "The help command provides assistance in navigating the shell. Use 'help' \
                      for a list of available commands, or 'help <command>' for details on one.",
    },
    Command {
        name: "home",
        summary: "Return to the home screen.",
        description: "Return to home.",
    },
    Command {
        name: "clear",
        summary: "Clear the terminal screen.",
        description: "Refreshes the terminal by clearing clutter. The screen will scroll down, \
                      leaving a fresh display.",
    },
    Command {
        name: "setcolor",
        summary: "Adjust text and background colors in the terminal.",
        description: "Adjusts text and background colors in the terminal. Use '-t' for text \
                      color and '-b' for background. Example: setcolor -b yellow -t white. \
                      Available colors: black, red, green, yellow, blue, purple, cyan, white.",
    },
    Command {
        name: "showinfo",
        summary: "Display board revision and MAC address.",
        description: "Displays board revision, MAC address, ARM clock rate, VideoCore memory \
                      and firmware revision.",
    },
    Command {
        name: "setbaud",
        summary: "Set the serial line speed.",
        description: "Sets the serial line speed. Example: setbaud 9600. Supported rates: \
                      300, 1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200, 230400, \
                      460800, 921600.",
    },
    Command {
        name: "setdatabits",
        summary: "Set the number of data bits (5-8).",
        description: "Sets the number of data bits per character. Example: setdatabits 7.",
    },
    Command {
        name: "setstopbits",
        summary: "Set the number of stop bits (1 or 2).",
        description: "Sets the number of stop bits per character. Example: setstopbits 2.",
    },
    Command {
        name: "setparity",
        summary: "Set parity (none, even or odd).",
        description: "Sets the parity mode. Example: setparity even.",
    },
    Command {
        name: "sethandshake",
        summary: "Turn hardware flow control on or off.",
        description: "Enables or disables RTS/CTS handshaking. Example: sethandshake on.",
    },
    Command {
        name: "showuart",
        summary: "Display the serial line settings.",
        description: "Displays the current baud rate, data bits, stop bits, parity and \
                      handshaking settings.",
    },
];

const BUILTIN_TABLE: CommandTable = CommandTable::new(&BUILTIN_COMMANDS);

/// Dispatcher for the board's built-in commands.
///
/// Owns the [`Platform`] that talks to the hardware and the serial settings
/// last applied through it.
#[derive(Debug)]
pub struct Builtins<P: Platform> {
    platform: P,
    serial: SerialConfig,
}

impl<P: Platform> Builtins<P> {
    /// Create the command set. The serial line is assumed to be running with
    /// [`SerialConfig::default`].
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            serial: SerialConfig::default(),
        }
    }

    /// The hardware collaborator.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The hardware collaborator, mutably.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Serial settings currently in effect.
    pub fn serial(&self) -> &SerialConfig {
        &self.serial
    }

    fn help<T: Transport>(&self, args: &Args<'_>, out: &mut T) -> Result<(), T::Error> {
        let table = self.commands();
        match args.get(1) {
            None => list_commands(&table, out),
            Some(topic) => match table.find(topic) {
                Some(command) => tprintf!(out, "%s\n", command.description),
                None => banner::boxed(
                    out,
                    "Command List",
                    "Error: Command does not exist",
                    NOT_FOUND_WIDTH,
                ),
            },
        }
    }

    fn set_color<T: Transport>(&self, args: &Args<'_>, out: &mut T) -> Result<(), T::Error> {
        let request = ColorRequest::parse(args.rest());
        if request.is_empty() {
            return banner::boxed(
                out,
                "Command List",
                "Please recheck your command or if the color is supported.",
                WIDE,
            );
        }
        if let Some(color) = request.text {
            out.write_str(color.foreground())?;
        }
        if let Some(color) = request.background {
            out.write_str(color.background())?;
        }
        Ok(())
    }

    fn show_info<T: Transport>(&mut self, out: &mut T) -> Result<(), T::Error> {
        banner::header(out, "Board revision and MAC address", WIDE)?;
        out.write_str("\n")?;

        for tag in SHOWINFO_PROPERTIES {
            let words = match self.platform.query(tag) {
                Ok(words) => words,
                Err(err) => {
                    warning!("showinfo: query {=u32:x} failed: {}", tag.id(), err);
                    banner::boxed(out, tag.label(), err.as_str(), WIDE)?;
                    continue;
                }
            };

            match tag {
                PropertyTag::MacAddress => {
                    let MacAddress(mac) = MacAddress::from_words(words);
                    tprintf!(
                        out,
                        "  %s: %02x:%02x:%02x:%02x:%02x:%02x\n\n",
                        tag.label(),
                        mac[0],
                        mac[1],
                        mac[2],
                        mac[3],
                        mac[4],
                        mac[5]
                    )?;
                }
                PropertyTag::BoardRevision => tprintf!(out, "  %s: %x\n\n", tag.label(), words[0])?,
                PropertyTag::ArmClockRate => tprintf!(out, "  %s: %dHz\n\n", tag.label(), words[0])?,
                PropertyTag::VcMemory => tprintf!(
                    out,
                    "  %s: %dB at 0x%08x\n\n",
                    tag.label(),
                    words[1],
                    words[0]
                )?,
                PropertyTag::FirmwareRevision => tprintf!(out, "  %s: %d\n\n", tag.label(), words[0])?,
            }
        }
        Ok(())
    }

    fn set_serial<T: Transport>(&mut self, command: &str, args: &Args<'_>, out: &mut T) -> Result<(), T::Error> {
        let Some(value) = args.get(1) else {
            return banner::boxed(out, "Serial Settings", Setting::usage(command), WIDE);
        };
        let Some(setting) = Setting::parse(command, value) else {
            return banner::boxed(out, "Serial Settings", Setting::usage(command), WIDE);
        };

        let config = self.serial.with(setting);
        if let Err(err) = self.platform.configure_serial(&config) {
            warning!("serial: configure failed: {}", err);
            return banner::boxed(out, "Serial Settings", err.as_str(), WIDE);
        }

        self.serial = config;
        tprintf!(out, "%s set to %s\n", setting.label(), value)
    }

    fn show_serial<T: Transport>(&self, out: &mut T) -> Result<(), T::Error> {
        let config = &self.serial;
        banner::header(out, "Serial Settings", WIDE)?;
        tprintf!(out, "  %-12s %d\n", "Baud rate:", config.baud_rate)?;
        tprintf!(out, "  %-12s %d\n", "Data bits:", config.data_bits)?;
        tprintf!(out, "  %-12s %d\n", "Stop bits:", config.stop_bits.count())?;
        tprintf!(out, "  %-12s %s\n", "Parity:", config.parity.name())?;
        tprintf!(
            out,
            "  %-12s %s\n",
            "Handshaking:",
            if config.handshaking { "on" } else { "off" }
        )?;
        banner::footer(out, WIDE)
    }
}

impl<P: Platform> Dispatcher for Builtins<P> {
    fn commands(&self) -> CommandTable {
        BUILTIN_TABLE
    }

    fn dispatch<T: Transport>(&mut self, line: &str, out: &mut T) -> Result<(), T::Error> {
        let args = Args::parse(line);
        let Some(name) = args.command() else {
            return Ok(());
        };
        debug!("dispatch: {=str}", name);

        match name {
            "help" => self.help(&args, out),
            "home" => home(out),
            "clear" => out.write_str(CLEAR_SCREEN),
            "setcolor" => self.set_color(&args, out),
            "showinfo" => self.show_info(out),
            "setbaud" | "setdatabits" | "setstopbits" | "setparity" | "sethandshake" => {
                self.set_serial(name, &args, out)
            }
            "showuart" => self.show_serial(out),
            _ => {
                warning!("dispatch: unknown command {=str}", name);
                banner::boxed(
                    out,
                    "Command List",
                    "Invalid command. Please try again!",
                    INVALID_WIDTH,
                )
            }
        }
    }
}

/// The `help` listing: usage hint, then one row per command with its summary
/// wrapped under a hanging indent.
fn list_commands<T: Transport>(table: &CommandTable, out: &mut T) -> Result<(), T::Error> {
    banner::header(out, "Command List", HELP_WIDTH)?;
    banner::paragraphs(
        out,
        "Use 'help <command>' to display detailed instructions for a specific command.\n\nCommands:",
        HELP_WIDTH,
    )?;

    let indent = 2 + NAME_COLUMN + 2;
    let columns = HELP_WIDTH.saturating_sub(2 + indent);
    let mut row = crate::render::Renderer::<HELP_WIDTH>::new();

    for command in table.iter() {
        for (i, piece) in banner::wrap(command.summary, columns).enumerate() {
            row.clear();
            if i == 0 {
                row.render("  %-*s- %s", &[NAME_COLUMN.into(), command.name.into(), piece.into()]);
            } else {
                row.render("%*s%s", &[indent.into(), "".into(), piece.into()]);
            }
            banner::row(out, row.as_str(), HELP_WIDTH)?;
        }
    }
    banner::footer(out, HELP_WIDTH)
}

fn home<T: Transport>(out: &mut T) -> Result<(), T::Error> {
    banner::boxed(
        out,
        "Home",
        "\nWelcome to the board shell.\n\n\
         Type 'help' for a list of available commands.\n",
        WIDE,
    )
}
