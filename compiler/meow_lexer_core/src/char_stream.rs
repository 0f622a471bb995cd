//! Character stream over a [`LineSource`].
//!
//! The stream holds a view of the current line and hands out one
//! character at a time. When the view runs dry it is refilled from the
//! line source; once the source returns an empty line the stream is
//! exhausted and [`CharStream::next_character`] returns `None` forever.
//!
//! # Priming
//!
//! The view starts out as a single `"\n"`. Consuming it moves the tracker
//! from line 0 to line 1, so the first real line of input reports line 1
//! and its first character reports column 1.

use crate::{LineSource, Position, PositionTracker};

/// Initial line view, consumed before any input.
const PRIMER: &str = "\n";

/// Pull-based character stream with line/column tracking.
#[derive(Clone, Debug)]
pub struct CharStream<'a, S> {
    source: S,
    line: &'a str,
    tracker: PositionTracker,
}

impl<'a, S: LineSource<'a>> CharStream<'a, S> {
    pub fn new(source: S) -> Self {
        CharStream {
            source,
            line: PRIMER,
            tracker: PositionTracker::new(),
        }
    }

    /// Pop the next character, or `None` at end of input.
    pub fn next_character(&mut self) -> Option<char> {
        let mut chars = self.line.chars();
        let c = chars.next()?;
        self.line = chars.as_str();
        if self.line.is_empty() {
            self.line = self.source.next_line();
        }
        self.tracker.advance(c);
        Some(c)
    }

    /// Position of the most recently consumed character.
    #[inline]
    pub fn position(&self) -> Position {
        self.tracker.position()
    }

    /// `true` once the line source has been exhausted.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.line.is_empty()
    }
}
