//! Lexer for Meow.
//!
//! Turns a character buffer into a pull-based stream of [`Token`]s. Each
//! call to [`Lexer::advance`] scans exactly one token; nothing is buffered
//! beyond a single lookahead character.
//!
//! Scanning is built on `meow_lexer_core`: the lexer owns a
//! [`CharStream`](meow_lexer_core::CharStream) and turns its raw
//! [`Position`](meow_lexer_core::Position)s into [`SourceLocation`]s that
//! share the lexer's file name.

mod keywords;
mod lex_error;
mod lexer;

pub use lex_error::LexError;
pub use lexer::Lexer;
pub use meow_lexer_core::{BufferLines, LineSource};

use meow_ir::Token;
use std::sync::Arc;

/// Lex a whole buffer, returning every token before end of stream.
///
/// Stops at the first error.
pub fn lex(buffer: &str, file: impl Into<Arc<str>>) -> Result<Vec<Token>, LexError> {
    Lexer::for_buffer(buffer, file).collect()
}
