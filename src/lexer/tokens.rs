use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("match", TokenKind::Match);
        map.insert("use", TokenKind::Use);
        map.insert("type", TokenKind::Type);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,

    Identifier,
    Number,
    String,

    // Reserved
    Fn,
    Match,
    Use,
    Type,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Bang,
    Pipe,
    Dot,
    Comma,
    Colon,
    ModSep, // ::

    Assignment, // =
    Arrow,      // ->

    Greater,
    GreaterEquals,
    Less,
    LessEquals,
    Equals,    // ==
    NotEquals, // !=

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One scanned token. For `Error` tokens the value holds the message
/// rather than source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
