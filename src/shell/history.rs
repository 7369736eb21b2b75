//! Bounded command history with a browse cursor.
//!
//! Entries are kept oldest to newest. The browse cursor ranges over
//! `0..=len()`, where `len()` is the live position (the line being typed).
//! When browsing starts the cursor is remembered as the anchor and the line
//! that was being typed is stashed, so that leaving the history, either by
//! walking back past the newest entry or by editing, returns to where normal
//! editing left off.

use heapless::{String, Vec};

use crate::log::trace;

/// Fixed-depth history of submitted lines.
///
/// `LINE` is the capacity of one entry, `DEPTH` the number of entries kept.
/// Appending to a full history drops the oldest entry and shifts the rest
/// down, preserving their order.
#[derive(Debug, Default)]
pub struct History<const LINE: usize, const DEPTH: usize> {
    entries: Vec<String<LINE>, DEPTH>,
    cursor: usize,
    anchor: usize,
    browsing: bool,
    draft: String<LINE>,
}

impl<const LINE: usize, const DEPTH: usize> History<LINE, DEPTH> {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            anchor: 0,
            browsing: false,
            draft: String::new(),
        }
    }

    /// Record a submitted line and return to the live position.
    pub fn append(&mut self, line: &str) {
        if self.entries.is_full() && !self.entries.is_empty() {
            self.entries.remove(0);
            trace!("history: evicted oldest entry");
        }
        if self.entries.push(truncated(line)).is_err() {
            trace!("history: zero depth, line not kept");
        }

        self.cursor = self.entries.len();
        self.anchor = self.cursor;
        self.browsing = false;
        self.draft.clear();
    }

    /// Step towards older entries.
    ///
    /// The first call of a browsing session remembers the cursor and `draft`
    /// (the line currently being edited) and shows the newest entry. Returns
    /// `None` without changing anything when the history is empty or the
    /// oldest entry is already showing.
    pub fn older(&mut self, draft: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        if !self.browsing {
            self.browsing = true;
            self.anchor = self.cursor;
            self.draft = truncated(draft);
        }

        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step towards newer entries.
    ///
    /// Only meaningful while browsing. Stepping past the newest entry lands
    /// back on the live position and yields the stashed draft, which is empty
    /// when nothing had been typed.
    pub fn newer(&mut self) -> Option<&str> {
        if !self.browsing || self.cursor >= self.entries.len() {
            return None;
        }

        self.cursor += 1;
        match self.entries.get(self.cursor) {
            Some(entry) => Some(entry.as_str()),
            None => Some(self.draft.as_str()),
        }
    }

    /// Stop browsing and put the cursor back where browsing started.
    pub fn exit_browsing(&mut self) {
        self.cursor = self.anchor;
        self.browsing = false;
        self.draft.clear();
    }

    /// Whether the edit line currently shows a recalled entry.
    pub fn is_browsing(&self) -> bool {
        self.browsing
    }

    /// Current browse cursor, `len()` meaning the live position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry `index`, counting from the oldest.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
