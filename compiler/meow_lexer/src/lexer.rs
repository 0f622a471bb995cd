//! The token state machine.
//!
//! Each call to [`Lexer::advance`] runs one pass of the machine:
//!
//! 1. Skip whitespace, starting from the pending lookahead character if
//!    there is one.
//! 2. At end of input, produce `EndOfStream`.
//! 3. Stabilize the token's location from the character stream.
//! 4. `"` opens a string literal that runs to the next `"`.
//! 5. Anything else starts a run extended by ASCII letters, classified as
//!    the keyword or as `Unknown`.
//!
//! # Lookahead
//!
//! Step 5 can only see the end of a run by reading one character past it.
//! That character is parked in `lookahead` and is the first character the
//! next pass examines. Its position is still the stream's current position,
//! so a token that starts on a parked character gets the right location.

use std::sync::Arc;

use meow_ir::{SourceLocation, Token, TokenKind};
use meow_lexer_core::{BufferLines, CharStream, LineSource};

use crate::keywords;
use crate::LexError;

/// Pull-based lexer over any [`LineSource`].
pub struct Lexer<'a, S> {
    chars: CharStream<'a, S>,
    /// Location of the most recently started token; `file:0:0` until then.
    last_location: SourceLocation,
    /// Character read past the end of the previous run, not yet examined.
    lookahead: Option<char>,
    current: Token,
    /// Set once the `Iterator` impl has yielded its last item.
    finished: bool,
}

impl<'a> Lexer<'a, BufferLines<'a>> {
    /// Lexer over an in-memory buffer.
    pub fn for_buffer(buffer: &'a str, file: impl Into<Arc<str>>) -> Self {
        Lexer::new(BufferLines::new(buffer), file)
    }
}

impl<'a, S: LineSource<'a>> Lexer<'a, S> {
    pub fn new(source: S, file: impl Into<Arc<str>>) -> Self {
        Lexer {
            chars: CharStream::new(source),
            last_location: SourceLocation::start_of(file.into()),
            lookahead: None,
            current: Token::end_of_stream(),
            finished: false,
        }
    }

    /// The most recently produced token, without advancing.
    ///
    /// `EndOfStream` until the first call to [`advance`](Self::advance).
    #[inline]
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Scan the next token and make it current.
    ///
    /// Once the input is exhausted every call returns `EndOfStream`.
    pub fn advance(&mut self) -> Result<&Token, LexError> {
        self.current = self.next_token()?;
        Ok(&self.current)
    }

    /// Location of the most recently started token.
    #[inline]
    pub fn last_location(&self) -> &SourceLocation {
        &self.last_location
    }

    /// File name shared by every location this lexer produces.
    #[inline]
    pub fn file(&self) -> &Arc<str> {
        self.last_location.file_name()
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let mut next = self.lookahead.take().or_else(|| self.chars.next_character());
        while next.is_some_and(is_whitespace) {
            next = self.chars.next_character();
        }

        let Some(first) = next else {
            return Ok(Token::end_of_stream());
        };

        let position = self.chars.position();
        self.last_location = self
            .last_location
            .with_position(position.line, position.column);
        let location = self.last_location.clone();

        if first == '"' {
            return self.string_literal(location);
        }

        let mut text = String::from(first);
        loop {
            match self.chars.next_character() {
                Some(c) if c.is_ascii_alphabetic() => text.push(c),
                other => {
                    self.lookahead = other;
                    break;
                }
            }
        }

        Ok(Token::new(keywords::classify(text), location))
    }

    /// Scan the body of a string literal whose opening quote is at `location`.
    ///
    /// The closing quote is consumed, so no lookahead is left behind.
    fn string_literal(&mut self, location: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::new();
        loop {
            match self.chars.next_character() {
                Some('"') => return Ok(Token::new(TokenKind::StringLiteral(text), location)),
                Some(c) => text.push(c),
                None => return Err(LexError::UnterminatedString { location }),
            }
        }
    }
}

/// Yields every token up to, but excluding, `EndOfStream`.
///
/// Fused: after end of stream or an error, `next` returns `None`.
impl<'a, S: LineSource<'a>> Iterator for Lexer<'a, S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance().cloned() {
            Ok(token) if token.is_end() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// C `isspace`: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
