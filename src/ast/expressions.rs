/// One parsed expression.
///
/// Number literals keep their raw text: conversion to a numeric value is
/// deferred to a later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Identifier(String),
    StringLiteral(String),
    NumberLiteral(String),

    Not(Box<Expr>),
    Negate(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),

    Call {
        callee: Box<Expr>,
        argument: Box<Expr>,
    },

    UnsafeAccess(Box<Expr>),
    ArrayAccess {
        target: Box<Expr>,
        index: Box<Expr>,
    },

    Tuple(Vec<Expr>),
    NamedTuple(Vec<NamedTupleEntry>),
}

/// Tags are an ordered sequence; duplicates are not rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTupleEntry {
    pub tag: String,
    pub expr: Expr,
}
