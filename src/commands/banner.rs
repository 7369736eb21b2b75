//! Framed text blocks.
//!
//! Help screens and every user-facing error are printed as a box:
//!
//! ```text
//! +------------------------------------------+
//! | Command List                     - [ ] x |
//! +==========================================+
//! | Invalid command. Please try again!       |
//! +------------------------------------------+
//! ```
//!
//! `width` is the number of columns between the corner `+` signs. Body text
//! is word-wrapped to fit; a word longer than a row is split.

use crate::console::Transport;
use crate::tprintf;

const TITLE_DECORATION: &str = "- [ ] x";

/// Print the top of a box: frame, title row and separator.
pub fn header<T: Transport>(out: &mut T, title: &str, width: usize) -> Result<(), T::Error> {
    rule(out, b'-', width)?;
    let field = width.saturating_sub(TITLE_DECORATION.len() + 2);
    tprintf!(out, "| %-*s%s |\n", field, title, TITLE_DECORATION)?;
    rule(out, b'=', width)
}

/// Print one body row, padding `text` to the box width.
///
/// `text` is printed as-is; callers wrap it first.
pub fn row<T: Transport>(out: &mut T, text: &str, width: usize) -> Result<(), T::Error> {
    tprintf!(out, "| %-*s |\n", width.saturating_sub(2), text)
}

/// Print the closing frame.
pub fn footer<T: Transport>(out: &mut T, width: usize) -> Result<(), T::Error> {
    rule(out, b'-', width)
}

/// Print a complete box.
///
/// `body` may contain `\n` to separate paragraphs; an empty paragraph prints
/// as a blank row.
pub fn boxed<T: Transport>(out: &mut T, title: &str, body: &str, width: usize) -> Result<(), T::Error> {
    header(out, title, width)?;
    paragraphs(out, body, width)?;
    footer(out, width)
}

/// Print word-wrapped rows for every paragraph of `body`.
pub fn paragraphs<T: Transport>(out: &mut T, body: &str, width: usize) -> Result<(), T::Error> {
    let columns = width.saturating_sub(2);
    for paragraph in body.split('\n') {
        if paragraph.trim().is_empty() {
            row(out, "", width)?;
            continue;
        }
        for line in wrap(paragraph, columns) {
            row(out, line, width)?;
        }
    }
    Ok(())
}

fn rule<T: Transport>(out: &mut T, fill: u8, width: usize) -> Result<(), T::Error> {
    out.write_byte(b'+')?;
    for _ in 0..width {
        out.write_byte(fill)?;
    }
    out.write_str("+\n")
}

/// Split `text` into lines of at most `width` bytes, breaking at spaces.
pub fn wrap(text: &str, width: usize) -> Wrap<'_> {
    Wrap { rest: text, width }
}

/// Iterator returned by [`wrap`].
#[derive(Debug, Clone)]
pub struct Wrap<'a> {
    rest: &'a str,
    width: usize,
}

impl<'a> Iterator for Wrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches(' ');
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }
        if self.width == 0 || rest.len() <= self.width {
            self.rest = "";
            return Some(rest.trim_end());
        }

        // A space right after the last fitting byte still allows a clean break.
        let window = &rest.as_bytes()[..=self.width];
        if let Some(space) = window.iter().rposition(|&b| b == b' ').filter(|&i| i > 0) {
            self.rest = &rest[space + 1..];
            return Some(rest[..space].trim_end());
        }

        let mut cut = self.width;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut == 0 {
            cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        self.rest = &rest[cut..];
        Some(&rest[..cut])
    }
}
