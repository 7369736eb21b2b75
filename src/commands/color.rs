//! Terminal colors for `setcolor`.

/// The eight ANSI terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Purple (ANSI magenta)
    Purple,
    /// Cyan
    Cyan,
    /// White
    White,
}

const NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "purple", "cyan", "white",
];

// Foreground colors are bold.
const FOREGROUND: [&str; 8] = [
    "\x1b[1;30m",
    "\x1b[1;31m",
    "\x1b[1;32m",
    "\x1b[1;33m",
    "\x1b[1;34m",
    "\x1b[1;35m",
    "\x1b[1;36m",
    "\x1b[1;37m",
];

const BACKGROUND: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
];

impl Color {
    /// Every color, in ANSI order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
    ];

    /// Look a color up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|index| Self::ALL[index])
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// SGR sequence selecting this color for text.
    pub fn foreground(self) -> &'static str {
        FOREGROUND[self as usize]
    }

    /// SGR sequence selecting this color for the background.
    pub fn background(self) -> &'static str {
        BACKGROUND[self as usize]
    }
}

/// Colors requested by a `setcolor` command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorRequest {
    /// Text color given with `-t`.
    pub text: Option<Color>,
    /// Background color given with `-b`.
    pub background: Option<Color>,
}

impl ColorRequest {
    /// Parse `-t <color>` and `-b <color>` pairs from the command arguments.
    ///
    /// Options may come in any order. Unknown options are skipped and an
    /// unknown color leaves that slot unset. When an option repeats, the last
    /// valid value wins.
    pub fn parse(args: &[&str]) -> Self {
        let mut request = Self::default();
        let mut tokens = args.iter();
        while let Some(&option) = tokens.next() {
            let slot = match option {
                "-t" => &mut request.text,
                "-b" => &mut request.background,
                _ => continue,
            };
            if let Some(color) = tokens.next().and_then(|name| Color::from_name(name)) {
                *slot = Some(color);
            }
        }
        request
    }

    /// Whether neither color was recognised.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.background.is_none()
    }
}
