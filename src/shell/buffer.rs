//! Fixed-capacity edit line.

use heapless::String;

/// The in-progress command line.
///
/// The buffer holds at most `N - 1` bytes; the last slot is the room the
/// line needs for its terminator, so a buffer holding `N - 1` bytes is
/// [`full`](Self::is_full) and must be submitted. Editing only happens at the
/// end of the line, so the cursor is always the current length.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer<const N: usize> {
    text: String<N>,
}

impl<const N: usize> EditBuffer<N> {
    /// Most bytes the line can hold.
    pub const LIMIT: usize = N - 1;

    /// Create an empty line.
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Append one ASCII byte at the cursor.
    ///
    /// Returns `false` (and leaves the line unchanged) when the byte is not
    /// ASCII or the line is already full.
    pub fn push(&mut self, byte: u8) -> bool {
        if !byte.is_ascii() || self.is_full() {
            return false;
        }
        self.text.push(char::from(byte)).is_ok()
    }

    /// Remove and return the byte before the cursor.
    pub fn pop(&mut self) -> Option<u8> {
        self.text.pop().map(|c| c as u8)
    }

    /// Cut the line back to `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        if len < self.text.len() {
            self.text.truncate(len);
        }
    }

    /// Append text at the cursor, stopping at the line limit.
    ///
    /// Returns `true` when all of `text` fit.
    pub fn push_str(&mut self, text: &str) -> bool {
        text.bytes().all(|byte| self.push(byte))
    }

    /// Replace the whole line with `text`, truncated to the line limit.
    pub fn replace(&mut self, text: &str) {
        self.text.clear();
        self.push_str(text);
    }

    /// Empty the line.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The line contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cursor position, which is also the line length.
    pub fn cursor(&self) -> usize {
        self.text.len()
    }

    /// Line length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the line reached its limit and has to be submitted.
    pub fn is_full(&self) -> bool {
        self.text.len() >= Self::LIMIT
    }

    /// Whether the line has nothing but whitespace in it.
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b.is_ascii_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut line: EditBuffer<8> = EditBuffer::new();
        assert!(line.push(b'l'));
        assert!(line.push(b's'));
        assert_eq!(line.as_str(), "ls");
        assert_eq!(line.cursor(), 2);

        assert_eq!(line.pop(), Some(b's'));
        assert_eq!(line.as_str(), "l");
        assert_eq!(line.pop(), Some(b'l'));
        assert_eq!(line.pop(), None);
    }

    #[test]
    fn test_limit_leaves_room_for_terminator() {
        let mut line: EditBuffer<4> = EditBuffer::new();
        assert!(line.push_str("abc"));
        assert!(line.is_full());
        assert!(!line.push(b'd'));
        assert_eq!(line.as_str(), "abc");
    }

    #[test]
    fn test_replace_truncates() {
        let mut line: EditBuffer<4> = EditBuffer::new();
        line.replace("abcdef");
        assert_eq!(line.as_str(), "abc");
        line.replace("x");
        assert_eq!(line.as_str(), "x");
    }

    #[test]
    fn test_rejects_non_ascii() {
        let mut line: EditBuffer<8> = EditBuffer::new();
        assert!(!line.push(0xC3));
        assert!(line.is_empty());
    }

    #[test]
    fn test_truncate_and_blank() {
        let mut line: EditBuffer<16> = EditBuffer::new();
        line.replace("   ");
        assert!(line.is_blank());
        line.replace("help me");
        assert!(!line.is_blank());
        line.truncate(4);
        assert_eq!(line.as_str(), "help");
        line.truncate(10);
        assert_eq!(line.as_str(), "help");
    }
}
