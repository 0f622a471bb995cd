//! Token types for the Meow lexer.
//!
//! The language has two lexical forms, the keyword and double-quoted
//! strings. Anything else the lexer accumulates is carried as `Unknown`
//! so the parser can decide what to do with it.

use crate::SourceLocation;
use std::fmt;

/// The one keyword of the language.
pub const KEYWORD: &str = "meow";

/// A token with the location of its first significant character.
///
/// `EndOfStream` has no location; every other kind always has one.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Option<SourceLocation>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Token {
            kind,
            location: Some(location),
        }
    }

    pub const fn end_of_stream() -> Self {
        Token {
            kind: TokenKind::EndOfStream,
            location: None,
        }
    }

    #[inline]
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.kind.text()
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfStream)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{:?} @ {}", self.kind, location),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

/// Token kinds for Meow.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// The keyword `meow`.
    Keyword,
    /// Text between a pair of `"` delimiters, taken verbatim.
    StringLiteral(String),
    /// A run of input that is not the keyword.
    Unknown(String),
    EndOfStream,
}

impl TokenKind {
    /// Text carried by the token. The keyword reports [`KEYWORD`].
    pub fn text(&self) -> &str {
        match self {
            TokenKind::Keyword => KEYWORD,
            TokenKind::StringLiteral(text) | TokenKind::Unknown(text) => text,
            TokenKind::EndOfStream => "",
        }
    }

    /// Short name for diagnostics and trace output.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::StringLiteral(_) => "string literal",
            TokenKind::Unknown(_) => "unknown token",
            TokenKind::EndOfStream => "end of stream",
        }
    }
}

#[cfg(test)]
mod tests;
