//! Parse error types.
//!
//! A parse either returns a complete module or one of these errors; no
//! partial module is ever handed back.

use meow_diagnostic::{Diagnostic, ErrorCode};
use meow_ir::SourceLocation;
use meow_lexer::LexError;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A run that is not the keyword, rejected because strict mode is on.
    #[error("{location}: unrecognized token `{text}`")]
    UnrecognizedToken {
        text: String,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Where the failing input starts.
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseError::Lex(err) => err.location(),
            ParseError::UnrecognizedToken { location, .. } => location,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnrecognizedToken { .. } => ErrorCode::E1001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::UnrecognizedToken { text, location } => Diagnostic::error(self.code())
                .with_message(format!("unrecognized token `{text}`"))
                .at(location.clone())
                .with_note(format!("only `{}` is a keyword", meow_ir::KEYWORD)),
        }
    }
}
