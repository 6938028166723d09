//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a lazy stream of tokens for parsing. It handles:
//!
//! - Pull-based scanning with one token of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token span tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
