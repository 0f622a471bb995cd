//! Low-level scanning support for the Meow lexer.
//!
//! This crate knows nothing about tokens. It turns a buffer into a stream of
//! characters and tracks where each one sits:
//! - [`LineSource`]: the capability of producing the next physical line
//! - [`BufferLines`]: the in-memory `LineSource` used for whole buffers
//! - [`PositionTracker`]: line/column bookkeeping
//! - [`CharStream`]: one character at a time, refilling from a `LineSource`
//!
//! The integration layer (`meow_lexer`) turns [`Position`] values into
//! full source locations carrying the file name.

mod char_stream;
mod line_source;
mod position;

pub use char_stream::CharStream;
pub use line_source::{BufferLines, LineSource};
pub use position::{Position, PositionTracker};
