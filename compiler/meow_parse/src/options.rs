//! Parser configuration.
//!
//! Options are a small `Copy` value passed in when the parser is built.
//! The default is the lenient policy the language has always had.

/// How the parser treats input it has no rule for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    strict: bool,
}

impl ParseOptions {
    /// Lenient options: unknown tokens are dropped.
    pub const fn new() -> Self {
        ParseOptions { strict: false }
    }

    /// In strict mode an unknown token fails the parse instead of being
    /// dropped.
    #[must_use]
    pub const fn strict(self, strict: bool) -> Self {
        ParseOptions { strict, ..self }
    }

    #[inline]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }
}
