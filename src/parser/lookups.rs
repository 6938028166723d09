use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::Expr,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::expr::*;

/// Operator precedence, lowest to highest. `Assignment` is reserved:
/// no expression operator sits at that level yet, but the call arrow's
/// right operand is parsed there to make `->` right-associative.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Call,
    Additive,
    Multiplicative,
}

pub type PrefixHandler = fn(&mut Lexer, Token) -> Result<Expr, Error>;
pub type PostfixHandler = fn(Expr, &mut Lexer, Token) -> Result<Expr, Error>;

#[derive(Clone, Copy)]
pub struct InfixHandler {
    pub parse: fn(Expr, &mut Lexer, Token) -> Result<Expr, Error>,
    pub power: BindingPower,
}

pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PostfixLookup = HashMap<TokenKind, PostfixHandler>;

// Built once behind lazy accessors and immutable afterwards.
lazy_static! {
    pub static ref PREFIX_LOOKUP: PrefixLookup = {
        let mut map: PrefixLookup = HashMap::new();
        map.insert(TokenKind::Identifier, parse_primary_expr);
        map.insert(TokenKind::Number, parse_primary_expr);
        map.insert(TokenKind::String, parse_primary_expr);
        map.insert(TokenKind::Bang, parse_prefix_expr);
        map.insert(TokenKind::Dash, parse_prefix_expr);
        map.insert(TokenKind::OpenParen, parse_grouping_expr);
        map
    };
    pub static ref INFIX_LOOKUP: InfixLookup = {
        let additive = InfixHandler {
            parse: parse_binary_expr,
            power: BindingPower::Additive,
        };
        let multiplicative = InfixHandler {
            parse: parse_binary_expr,
            power: BindingPower::Multiplicative,
        };

        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, additive);
        map.insert(TokenKind::Dash, additive);
        map.insert(TokenKind::Star, multiplicative);
        map.insert(TokenKind::Slash, multiplicative);
        map.insert(TokenKind::Percent, multiplicative);
        map.insert(
            TokenKind::Arrow,
            InfixHandler {
                parse: parse_call_expr,
                power: BindingPower::Call,
            },
        );
        map
    };
    pub static ref POSTFIX_LOOKUP: PostfixLookup = {
        let mut map: PostfixLookup = HashMap::new();
        map.insert(TokenKind::Bang, parse_unsafe_access_expr);
        map.insert(TokenKind::OpenBracket, parse_array_access_expr);
        map
    };
}
