//! Tab completion of command names.
//!
//! The token under the cursor (everything after the last space) is matched
//! as a prefix against the command table. The scan starts just after the
//! previous match and wraps around, so pressing the completion key again on
//! an ambiguous prefix moves on to the next candidate instead of repeating
//! the first one.

use super::buffer::EditBuffer;
use crate::commands::CommandTable;
use crate::console::ASCII_SPACE;
use crate::log::trace;

/// What a completion request did to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing in the table starts with the token; the line is unchanged.
    NoMatch,
    /// The token matched exactly one command and was replaced by its name.
    Completed {
        /// Table index of the command.
        index: usize,
    },
    /// Several commands match. The token was replaced by the first one found
    /// and the caller is expected to list the rest.
    Ambiguous {
        /// Table index of the command written into the line.
        index: usize,
        /// Length of the prefix that was matched, which is the start of the
        /// completed name.
        stem_len: usize,
    },
}

/// The prefix being cycled on by back-to-back completion requests.
#[derive(Debug, Clone, Copy)]
struct Cycle {
    start: usize,
    stem_len: usize,
}

/// Completion state carried between requests.
#[derive(Debug, Default)]
pub struct Completer {
    last_match: Option<usize>,
    cycle: Option<Cycle>,
}

struct Scan {
    first: usize,
    ambiguous: bool,
}

impl Completer {
    /// Create a completer with no previous match.
    pub const fn new() -> Self {
        Self {
            last_match: None,
            cycle: None,
        }
    }

    /// Table index of the last completed command, if the last request matched.
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    /// Forget the prefix being cycled on.
    ///
    /// Called by the line editor for every key that is not a completion
    /// request, so a later request completes what the user actually typed.
    pub fn break_cycle(&mut self) {
        self.cycle = None;
    }

    /// Complete the token under the cursor of `line` against `table`.
    pub fn complete<const N: usize>(
        &mut self,
        line: &mut EditBuffer<N>,
        table: &CommandTable,
    ) -> Outcome {
        let text = line.as_str();
        let start = text
            .bytes()
            .rposition(|byte| byte == ASCII_SPACE)
            .map_or(0, |space| space + 1);
        let token = &text[start..];

        // Repeated request on a line we completed ourselves: keep matching
        // against the prefix the user typed, not the name we filled in.
        let stem_len = match (self.cycle, self.last_match.and_then(|i| table.get(i))) {
            (Some(cycle), Some(last)) if cycle.start == start && last.name == token => cycle.stem_len,
            _ => token.len(),
        };
        let stem = &token[..stem_len];

        let from = self.last_match.map_or(0, |index| index + 1);
        let Some(scan) = scan(table, stem, from) else {
            trace!("complete: no match");
            self.last_match = None;
            self.cycle = None;
            return Outcome::NoMatch;
        };

        let Some(command) = table.get(scan.first) else {
            return Outcome::NoMatch;
        };
        if start + command.name.len() >= EditBuffer::<N>::LIMIT {
            self.last_match = None;
            self.cycle = None;
            return Outcome::NoMatch;
        }

        line.truncate(start);
        line.push_str(command.name);
        self.last_match = Some(scan.first);
        self.cycle = Some(Cycle { start, stem_len });

        if scan.ambiguous {
            trace!("complete: ambiguous, took {}", scan.first);
            Outcome::Ambiguous {
                index: scan.first,
                stem_len,
            }
        } else {
            trace!("complete: unique {}", scan.first);
            Outcome::Completed { index: scan.first }
        }
    }
}

/// One circular pass over `table` starting at `from`, stopping at the second
/// match.
fn scan(table: &CommandTable, stem: &str, from: usize) -> Option<Scan> {
    let count = table.len();
    let mut first = None;

    for offset in 0..count {
        let index = (from + offset) % count;
        let Some(command) = table.get(index) else {
            continue;
        };
        if !command.name.starts_with(stem) {
            continue;
        }
        match first {
            None => first = Some(index),
            Some(first) => {
                return Some(Scan {
                    first,
                    ambiguous: true,
                });
            }
        }
    }

    first.map(|first| Scan {
        first,
        ambiguous: false,
    })
}
