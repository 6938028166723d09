//! Structural analysis module for the front end.
//!
//! This module recovers block structure from indentation before any token
//! level parsing happens. It handles:
//!
//! - Splitting raw source into dedented lines
//! - Nesting consecutive deeper-indented lines into block subtrees
//! - Navigation over the finished tree, line by line or block by block

pub mod structure;
