//! Parser for Meow.
//!
//! Pulls tokens from a [`Lexer`] one at a time and collects every keyword
//! into a [`Module`]. String literals are recognized but carry no meaning,
//! so they are skipped. Unknown runs are dropped, or rejected in strict
//! mode (see [`ParseOptions`]).
//!
//! # Tracing
//!
//! - `RUST_LOG=meow_parse=debug`: dropped tokens and per-module summaries.
//! - `RUST_LOG=meow_parse=trace`: every token the parser consumes.

mod error;
mod options;

pub use error::ParseError;
pub use options::ParseOptions;

use std::sync::{Arc, Once};

use meow_ir::{Expr, Module, TokenKind};
use meow_lexer::{BufferLines, Lexer, LineSource};
use tracing::{debug, trace};

/// Parser state.
///
/// Owns its lexer for the lifetime of one parse.
pub struct Parser<'a, S> {
    lexer: Lexer<'a, S>,
    options: ParseOptions,
}

impl<'a, S: LineSource<'a>> Parser<'a, S> {
    /// Create a parser with default (lenient) options.
    pub fn new(lexer: Lexer<'a, S>) -> Self {
        Self::with_options(lexer, ParseOptions::default())
    }

    pub fn with_options(lexer: Lexer<'a, S>, options: ParseOptions) -> Self {
        Parser { lexer, options }
    }

    /// Parse the whole input into a module.
    ///
    /// The module's location is the lexer's location when parsing starts.
    pub fn parse_module(mut self) -> Result<Module, ParseError> {
        let start = self.lexer.last_location().clone();
        let mut exprs = Vec::new();

        self.lexer.advance()?;
        loop {
            let token = self.lexer.current_token();
            trace!(
                kind = token.kind.display_name(),
                location = ?token.location(),
                "parse_module"
            );

            match &token.kind {
                TokenKind::EndOfStream => break,
                TokenKind::Keyword => {
                    if let Some(location) = token.location() {
                        exprs.push(Expr::keyword(location.clone()));
                    }
                }
                TokenKind::StringLiteral(_) => {}
                TokenKind::Unknown(text) => {
                    let location = token
                        .location()
                        .cloned()
                        .unwrap_or_else(|| self.lexer.last_location().clone());
                    if self.options.is_strict() {
                        return Err(ParseError::UnrecognizedToken {
                            text: text.clone(),
                            location,
                        });
                    }
                    debug!(text = %text, %location, "dropping unrecognized token");
                }
            }

            self.lexer.advance()?;
        }

        debug!(file = %start.file(), exprs = exprs.len(), "parsed module");
        Ok(Module::new(start, exprs))
    }
}

/// Parse an in-memory buffer with default options.
pub fn parse(buffer: &str, file: impl Into<Arc<str>>) -> Result<Module, ParseError> {
    parse_with_options(buffer, file, ParseOptions::default())
}

pub fn parse_with_options(
    buffer: &str,
    file: impl Into<Arc<str>>,
    options: ParseOptions,
) -> Result<Module, ParseError> {
    let lexer: Lexer<'_, BufferLines<'_>> = Lexer::for_buffer(buffer, file);
    Parser::with_options(lexer, options).parse_module()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Only installs a subscriber when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
