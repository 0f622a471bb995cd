//! Diagnostics for the Meow front end.
//!
//! Errors raised by the lexer and parser convert into a [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary location (where it went wrong)
//! - Notes (why it's wrong)
//!
//! Rendering to a terminal is left to the caller; `Display` gives a plain
//! text form suitable for logs and tests.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
