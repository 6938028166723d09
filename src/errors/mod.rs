//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout scanning, structural
//! splitting and parsing. It includes:
//!
//! - An error structure carrying a line-relative span and source line
//! - Specific error variants for lexical, structural and syntax failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
