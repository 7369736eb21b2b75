//! printf-style output renderer.
//!
//! Every piece of text the shell and its commands print goes through this
//! module. It implements a small, predictable subset of C's `printf`:
//!
//! ```text
//! %[-][0][width|*][.precision|.*]conversion
//! ```
//!
//! | Conversion | Argument      | Output                                   |
//! |------------|---------------|------------------------------------------|
//! | `d`        | integer       | decimal, `-` sign when negative          |
//! | `x`        | unsigned int  | lowercase hexadecimal, no `0x` prefix    |
//! | `c`        | character     | a single byte                            |
//! | `s`        | text          | copied as-is                             |
//! | `f`        | float         | fixed point, `precision` digits (def. 6) |
//! | `%`        | none          | a literal `%`                            |
//!
//! Any other conversion letter is copied through literally together with its
//! `%`. The renderer never fails: missing arguments render as zero or empty
//! text, and output past the scratch buffer's capacity is dropped.
//!
//! # Examples
//!
//! ```rust
//! use termshell::render::{Arg, Renderer};
//!
//! let mut out: Renderer<64> = Renderer::new();
//! out.render("%05d|%-4x|%.2f", &[Arg::Int(-3), Arg::Uint(255), Arg::Float(2.5)]);
//! assert_eq!(out.as_str(), "-0003|ff  |2.50");
//! ```

use heapless::Vec;

use crate::console::Transport;

#[cfg(test)]
mod tests;

/// Capacity of the scratch buffer used by [`printf`].
pub const RENDER_CAPACITY: usize = 10_000;

/// Fraction digits printed by `%f` when no precision is given.
pub const DEFAULT_PRECISION: usize = 6;

/// Upper bound on `%f` precision; larger requests are clamped.
pub const MAX_PRECISION: usize = 20;

// Worst case for %f: 20 integer digits, a carry digit, the point and the fraction.
const FLOAT_BODY: usize = 48;

/// A single formatting argument.
///
/// Arguments are consumed left to right, one per conversion plus one for every
/// `*` width or precision. A conversion that receives an argument of another
/// kind coerces it instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    /// A signed integer, normally used with `%d` or `*`.
    Int(i32),
    /// An unsigned integer, normally used with `%x`.
    Uint(u32),
    /// A character for `%c`. Non-ASCII characters print as `?`.
    Char(char),
    /// Text for `%s`.
    Str(&'a str),
    /// A floating-point value for `%f`.
    Float(f64),
}

impl Arg<'_> {
    fn as_int(&self) -> i32 {
        match *self {
            Arg::Int(v) => v,
            Arg::Uint(v) => v as i32,
            Arg::Char(c) => c as i32,
            Arg::Float(v) => v as i32,
            Arg::Str(_) => 0,
        }
    }

    fn as_uint(&self) -> u32 {
        match *self {
            Arg::Int(v) => v as u32,
            Arg::Uint(v) => v,
            Arg::Char(c) => c as u32,
            Arg::Float(v) => v as u32,
            Arg::Str(_) => 0,
        }
    }

    fn as_float(&self) -> f64 {
        match *self {
            Arg::Int(v) => f64::from(v),
            Arg::Uint(v) => f64::from(v),
            Arg::Char(c) => f64::from(c as u32),
            Arg::Float(v) => v,
            Arg::Str(_) => 0.0,
        }
    }

    fn as_byte(&self) -> u8 {
        match *self {
            Arg::Char(c) if c.is_ascii() => c as u8,
            Arg::Int(v) => v as u8,
            Arg::Uint(v) => v as u8,
            _ => b'?',
        }
    }

    fn as_text(&self) -> &str {
        match *self {
            Arg::Str(s) => s,
            _ => "",
        }
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Arg::Int(value)
    }
}

impl From<i16> for Arg<'_> {
    fn from(value: i16) -> Self {
        Arg::Int(value.into())
    }
}

impl From<u32> for Arg<'_> {
    fn from(value: u32) -> Self {
        Arg::Uint(value)
    }
}

impl From<u16> for Arg<'_> {
    fn from(value: u16) -> Self {
        Arg::Uint(value.into())
    }
}

impl From<u8> for Arg<'_> {
    fn from(value: u8) -> Self {
        Arg::Uint(value.into())
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Arg::Uint(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(value.into())
    }
}

/// Flags, width and precision parsed from one directive.
#[derive(Debug, Clone, Copy, Default)]
struct Directive {
    left: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
}

/// A bounded scratch buffer that formats into itself.
///
/// The buffer accumulates output from one or more [`render`](Self::render)
/// calls. Once it is full further bytes are silently discarded and
/// [`is_truncated`](Self::is_truncated) starts returning `true`.
#[derive(Debug)]
pub struct Renderer<const N: usize> {
    buf: Vec<u8, N>,
    truncated: bool,
}

impl<const N: usize> Default for Renderer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Renderer<N> {
    /// Create an empty renderer.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            truncated: false,
        }
    }

    /// Discard everything rendered so far.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }

    /// The rendered bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The rendered text.
    ///
    /// If truncation split a multi-byte character, the partial character is
    /// left out.
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.buf) {
            Ok(text) => text,
            Err(err) => core::str::from_utf8(&self.buf[..err.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Number of bytes rendered.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been rendered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether any output was dropped because the buffer filled up.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Append `fmt` to the buffer, substituting `args` into its directives.
    pub fn render(&mut self, fmt: &str, args: &[Arg<'_>]) {
        let fmt = fmt.as_bytes();
        let mut args = args.iter().copied();
        let mut next_arg = move || args.next().unwrap_or(Arg::Int(0));
        let mut i = 0;

        while i < fmt.len() {
            if self.buf.is_full() {
                self.truncated = true;
                break;
            }

            let byte = fmt[i];
            i += 1;
            if byte != b'%' {
                self.push(byte);
                continue;
            }

            if fmt.get(i) == Some(&b'%') {
                self.push(b'%');
                i += 1;
                continue;
            }

            let mut directive = Directive::default();
            if fmt.get(i) == Some(&b'-') {
                directive.left = true;
                i += 1;
            }
            if fmt.get(i) == Some(&b'0') {
                directive.zero = true;
                i += 1;
            }

            match fmt.get(i) {
                Some(b'*') => {
                    i += 1;
                    let width = next_arg().as_int();
                    if width < 0 {
                        directive.left = true;
                    }
                    directive.width = width.unsigned_abs() as usize;
                }
                Some(d) if d.is_ascii_digit() => directive.width = parse_number(fmt, &mut i),
                _ => {}
            }

            if fmt.get(i) == Some(&b'.') {
                i += 1;
                if fmt.get(i) == Some(&b'*') {
                    i += 1;
                    directive.precision = usize::try_from(next_arg().as_int()).ok();
                } else {
                    directive.precision = Some(parse_number(fmt, &mut i));
                }
            }

            let Some(&conversion) = fmt.get(i) else {
                // Directive cut off by the end of the format string.
                self.push(b'%');
                break;
            };
            i += 1;

            match conversion {
                b'd' => match next_arg() {
                    Arg::Uint(value) => self.unsigned(value, directive),
                    other => self.integer(other.as_int(), directive),
                },
                b'x' => self.hex(next_arg().as_uint(), directive),
                b'c' => self.justify(directive, false, &[next_arg().as_byte()], false),
                b's' => {
                    let arg = next_arg();
                    self.justify(directive, false, arg.as_text().as_bytes(), false);
                }
                b'f' => self.float(next_arg().as_float(), directive),
                other => {
                    self.push(b'%');
                    self.push(other);
                }
            }
        }
    }

    fn push(&mut self, byte: u8) -> bool {
        if self.buf.push(byte).is_err() {
            self.truncated = true;
            return false;
        }
        true
    }

    fn extend(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if !self.push(byte) {
                break;
            }
        }
    }

    fn pad(&mut self, byte: u8, count: usize) {
        for _ in 0..count {
            if !self.push(byte) {
                break;
            }
        }
    }

    /// Lay out `body` inside the field described by `directive`.
    ///
    /// The sign always sits directly before the digits or, when zero padding,
    /// before the zeros. Left justification pads with spaces only.
    fn justify(&mut self, directive: Directive, negative: bool, body: &[u8], zero_allowed: bool) {
        let fill = directive.width.saturating_sub(body.len() + usize::from(negative));

        if directive.left {
            if negative {
                self.push(b'-');
            }
            self.extend(body);
            self.pad(b' ', fill);
        } else if directive.zero && zero_allowed {
            if negative {
                self.push(b'-');
            }
            self.pad(b'0', fill);
            self.extend(body);
        } else {
            self.pad(b' ', fill);
            if negative {
                self.push(b'-');
            }
            self.extend(body);
        }
    }

    fn integer(&mut self, value: i32, directive: Directive) {
        let mut digits = [0u8; 20];
        let body = decimal(u64::from(value.unsigned_abs()), &mut digits);
        self.justify(directive, value < 0, body, true);
    }

    fn unsigned(&mut self, value: u32, directive: Directive) {
        let mut digits = [0u8; 20];
        let body = decimal(u64::from(value), &mut digits);
        self.justify(directive, false, body, true);
    }

    fn hex(&mut self, mut value: u32, directive: Directive) {
        let mut digits = [0u8; 8];
        let mut start = digits.len();
        loop {
            start -= 1;
            let nibble = (value & 0xF) as u8;
            digits[start] = if nibble < 10 {
                b'0' + nibble
            } else {
                b'a' + nibble - 10
            };
            value >>= 4;
            if value == 0 {
                break;
            }
        }
        self.justify(directive, false, &digits[start..], true);
    }

    /// Fixed-point conversion.
    ///
    /// The integer part is produced by repeated division, the fraction by
    /// repeated multiplication by ten. Whatever remains after the last digit
    /// rounds half-up, carrying leftwards through the digits already emitted.
    /// A zero integer part prints no digit unless the field is too narrow to
    /// pad, so `%8.2f` of `0.5` is `"     .50"` while `%.2f` is `"0.50"`.
    fn float(&mut self, value: f64, directive: Directive) {
        let precision = directive
            .precision
            .unwrap_or(DEFAULT_PRECISION)
            .min(MAX_PRECISION);
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };
        let whole = magnitude as u64;
        let mut fraction = magnitude - whole as f64;
        if !(0.0..1.0).contains(&fraction) {
            // NaN, infinities and values beyond u64 have no usable fraction.
            fraction = 0.0;
        }

        let mut body: Vec<u8, FLOAT_BODY> = Vec::new();
        if whole > 0 {
            let mut digits = [0u8; 20];
            let _ = body.extend_from_slice(decimal(whole, &mut digits));
        }

        if precision > 0 {
            let _ = body.push(b'.');
            for _ in 0..precision {
                fraction *= 10.0;
                let digit = (fraction as u8).min(9);
                fraction -= f64::from(digit);
                let _ = body.push(b'0' + digit);
            }
        }

        if fraction >= 0.5 {
            round_up(&mut body);
        }

        // A magnitude below one only gets its integer zero when the field
        // leaves no room for padding.
        let bare = body.first().is_none_or(|&first| first == b'.');
        if bare && directive.width <= body.len() + usize::from(negative) {
            let _ = body.insert(0, b'0');
        }

        self.justify(directive, negative, &body, true);
    }
}

/// Decimal digits of `value`, most significant first. Zero yields `"0"`.
fn decimal(mut value: u64, buf: &mut [u8; 20]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[start..]
}

/// Add one unit in the last place, skipping the decimal point.
fn round_up<const N: usize>(body: &mut Vec<u8, N>) {
    for byte in body.iter_mut().rev() {
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                return;
            }
        }
    }
    // Every digit was a nine.
    let _ = body.insert(0, b'1');
}

fn parse_number(fmt: &[u8], i: &mut usize) -> usize {
    let mut value: usize = 0;
    while let Some(d) = fmt.get(*i).filter(|d| d.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add(usize::from(d - b'0'));
        *i += 1;
    }
    value
}

/// Render `fmt` into a fresh scratch buffer and send it in one write.
///
/// The buffer lives on the stack for the duration of the call. Output beyond
/// [`RENDER_CAPACITY`] bytes is dropped.
pub fn printf<T: Transport + ?Sized>(out: &mut T, fmt: &str, args: &[Arg<'_>]) -> Result<(), T::Error> {
    let mut scratch: Renderer<RENDER_CAPACITY> = Renderer::new();
    scratch.render(fmt, args);
    out.write_bytes(scratch.as_bytes())
}

/// Format and print through a [`Transport`].
///
/// Each argument is converted with [`Arg::from`], so plain integers, floats,
/// characters and string slices can be passed directly.
///
/// # Examples
///
/// ```rust
/// use termshell::console::{Error, Transport};
/// use termshell::tprintf;
///
/// struct Sink(Vec<u8>);
///
/// impl Transport for Sink {
///     type Error = Error;
///     fn read_byte(&mut self) -> Result<u8, Error> {
///         Err(Error::Disconnected)
///     }
///     fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
///         self.0.push(byte);
///         Ok(())
///     }
/// }
///
/// let mut sink = Sink(Vec::new());
/// tprintf!(&mut sink, "%s: %x", "rev", 0xa02082u32).unwrap();
/// assert_eq!(sink.0, b"rev: a02082");
/// ```
#[macro_export]
macro_rules! tprintf {
    ($out:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::render::printf($out, $fmt, &[$($crate::render::Arg::from($arg)),*])
    };
}
