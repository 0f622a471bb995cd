//! AST Visitor Pattern
//!
//! Read-only traversal of a parsed [`Module`], used by code generators that
//! turn each keyword expression into an operation of their own.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add custom behavior at specific nodes.
//!
//! # Example
//!
//! ```text
//! struct CountMeows {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountMeows {
//!     fn visit_expr(&mut self, _expr: &'ast Expr) {
//!         self.count += 1;
//!     }
//! }
//! ```

use crate::{Expr, Module};

/// AST Visitor trait.
///
/// The visitor can mutate its own state during traversal.
/// The AST itself remains immutable.
pub trait Visitor<'ast> {
    /// Visit a module.
    fn visit_module(&mut self, module: &'ast Module) {
        walk_module(self, module);
    }

    /// Visit a keyword expression.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        let _ = expr;
    }
}

/// Visit every expression of `module` in source order.
pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, module: &'ast Module) {
    for expr in &module.exprs {
        visitor.visit_expr(expr);
    }
}

#[cfg(test)]
mod tests;
