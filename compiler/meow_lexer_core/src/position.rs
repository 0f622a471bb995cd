//! Line and column bookkeeping.
//!
//! The tracker is advanced once per character handed out by the
//! [`CharStream`](crate::CharStream). The column is bumped *before* the
//! character is examined, so the first character of a line reports
//! column 1. Consuming a newline moves to the next line and resets the
//! column to 0.

use std::fmt;

/// A line/column pair, without a file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Running line/column counters for a single scan.
///
/// # Invariant
///
/// Within one scan `(line, column)` never decreases, except that the
/// column drops back to 0 when a newline is consumed.
#[derive(Clone, Debug, Default)]
pub struct PositionTracker {
    line: u32,
    column: u32,
}

impl PositionTracker {
    /// Create a tracker at line 0, column 0.
    pub const fn new() -> Self {
        PositionTracker { line: 0, column: 0 }
    }

    /// Account for one consumed character.
    #[inline]
    pub fn advance(&mut self, c: char) {
        self.column = self.column.saturating_add(1);
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 0;
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Snapshot of the current counters.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}
