//! Lexer error types.
//!
//! Recognized forms never fail; only a string literal that runs into end
//! of input is an error.

use meow_diagnostic::{Diagnostic, ErrorCode};
use meow_ir::SourceLocation;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// Missing closing `"` for a string literal. `location` is the opening quote.
    #[error("{location}: unterminated string literal")]
    UnterminatedString { location: SourceLocation },
}

impl LexError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            LexError::UnterminatedString { location } => location,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnterminatedString { location } => Diagnostic::error(self.code())
                .with_message("unterminated string literal")
                .at(location.clone())
                .with_note("add a closing `\"` before the end of the input"),
        }
    }
}
