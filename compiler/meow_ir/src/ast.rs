//! AST for a parsed Meow buffer.
//!
//! The tree is two levels deep: a [`Module`] owns an ordered list of
//! [`Expr`] nodes, one per keyword occurrence, in source order.

use crate::{SourceLocation, KEYWORD};

/// One keyword occurrence.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub location: SourceLocation,
    pub text: String,
}

impl Expr {
    pub fn new(location: SourceLocation, text: impl Into<String>) -> Self {
        Expr {
            location,
            text: text.into(),
        }
    }

    /// Expression for the keyword found at `location`.
    pub fn keyword(location: SourceLocation) -> Self {
        Self::new(location, KEYWORD)
    }

    #[inline]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Top-level parsed unit.
///
/// `location` is where parsing started, i.e. the start of the buffer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Module {
    pub location: SourceLocation,
    pub exprs: Vec<Expr>,
}

impl Module {
    pub fn new(location: SourceLocation, exprs: Vec<Expr>) -> Self {
        Module { location, exprs }
    }

    #[inline]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    #[inline]
    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.exprs.iter()
    }
}

impl<'a> IntoIterator for &'a Module {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.exprs.iter()
    }
}
