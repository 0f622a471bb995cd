//! Source locations.
//!
//! A location names a file and a line/column inside it. Lines and columns
//! follow the lexer's counting: the first character of the buffer sits at
//! line 1, column 1, and `file:0:0` marks the start of a buffer before any
//! character has been read.

use std::fmt;
use std::sync::Arc;

/// `file:line:column` position of a token or AST node.
///
/// Immutable once produced. Cloning bumps the reference count of the shared
/// file name.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    file: Arc<str>,
    line: u32,
    column: u32,
}

impl SourceLocation {
    #[inline]
    pub fn new(file: Arc<str>, line: u32, column: u32) -> Self {
        SourceLocation { file, line, column }
    }

    /// Location at the start of `file`, before any character is read.
    pub fn start_of(file: Arc<str>) -> Self {
        Self::new(file, 0, 0)
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The shared file name itself.
    #[inline]
    pub fn file_name(&self) -> &Arc<str> {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Same file, different position. The file name is shared, not copied.
    #[must_use]
    pub fn with_position(&self, line: u32, column: u32) -> Self {
        Self::new(Arc::clone(&self.file), line, column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
