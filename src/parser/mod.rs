//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parsers that transform token streams into an
//! Abstract Syntax Tree. It uses a Pratt parser for expressions with
//! proper operator precedence and handles:
//!
//! - Declaration parsing (imports, function signatures, type aliases)
//! - Expression parsing (binary ops, calls, literals, tuples)
//! - Type parsing for type annotations
//!
//! Expression parsing uses prefix/infix/postfix handler tables keyed on
//! token kind, with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod types;
