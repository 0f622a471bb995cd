//! Keyword resolution.
//!
//! The keyword table has a single entry. Accumulated text that does not
//! match it is handed back as `Unknown` so the parser can apply its own
//! policy.

use meow_ir::{TokenKind, KEYWORD};

/// Look up a reserved keyword by text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    (text == KEYWORD).then_some(TokenKind::Keyword)
}

/// Classify an accumulated run, taking ownership of its text.
pub(crate) fn classify(text: String) -> TokenKind {
    lookup(&text).unwrap_or(TokenKind::Unknown(text))
}
