//! Meow IR - shared front-end types
//!
//! This crate contains the data passed between the lexer, the parser, and
//! whatever consumes the parsed module:
//! - `SourceLocation` for `file:line:column` positions
//! - `Token` and `TokenKind` for lexer output
//! - `Expr` and `Module` for the AST
//! - `Visitor` for read-only traversal by code generators
//!
//! # Design Philosophy
//!
//! - **Share the file name**: every location from one buffer holds the same
//!   `Arc<str>`, so cloning a location never copies the name.
//! - **Own the tree**: a `Module` owns its expressions outright; nothing in
//!   the AST borrows from the lexer.

mod ast;
mod location;
mod token;
pub mod visitor;

pub use ast::{Expr, Module};
pub use location::SourceLocation;
pub use token::{Token, TokenKind, KEYWORD};
pub use visitor::Visitor;
