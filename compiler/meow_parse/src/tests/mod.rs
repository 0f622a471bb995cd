//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `parser`: examples over concrete inputs, options, and errors
//! - `properties`: property tests over generated inputs

mod properties;
