//! Type tree definitions for the AST.
//!
//! This module defines the parsed representation of type annotations:
//!
//! - Simple named types
//! - Tuples and named tuples
//! - Arrays with a dimension count
//! - Function types with one argument and an optional return

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Simple(String),
    Tuple(Vec<Type>),
    NamedTuple(Vec<NamedTypeEntry>),
    Array {
        element: Box<Type>,
        /// Number of `[]` pairs, at least 1.
        dimensions: usize,
    },
    Function {
        argument: Box<Type>,
        ret: Option<Box<Type>>,
    },
}

/// Tags are an ordered sequence; the grammar does not require them to be
/// unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTypeEntry {
    pub tag: String,
    pub ty: Type,
}
