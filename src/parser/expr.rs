use crate::{
    ast::expressions::{Expr, NamedTupleEntry},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{BindingPower, INFIX_LOOKUP, POSTFIX_LOOKUP, PREFIX_LOOKUP},
    parser::{advance, expect},
};

pub fn parse_expression(lex: &mut Lexer) -> Result<Expr, Error> {
    parse_expr(lex, BindingPower::Default)
}

/// Precedence climbing: parse a prefix term, fold in every available
/// postfix operator, then fold infix operators that bind strictly tighter
/// than `bp`.
pub fn parse_expr(lex: &mut Lexer, bp: BindingPower) -> Result<Expr, Error> {
    let token = advance(lex)?;
    let prefix = match PREFIX_LOOKUP.get(&token.kind) {
        Some(prefix) => *prefix,
        None => {
            return Err(Error::at_token(
                &token,
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
            ))
        }
    };

    let mut left = prefix(lex, token)?;

    // postfix operators always bind tighter than any infix operator
    while let Some(postfix) = POSTFIX_LOOKUP.get(&lex.peek_token().kind).copied() {
        let token = lex.next_token();
        left = postfix(left, lex, token)?;
    }

    while next_power(lex) > bp {
        let token = lex.next_token();
        let infix = INFIX_LOOKUP[&token.kind];
        left = (infix.parse)(left, lex, token)?;
    }

    Ok(left)
}

fn next_power(lex: &mut Lexer) -> BindingPower {
    match INFIX_LOOKUP.get(&lex.peek_token().kind) {
        Some(infix) => infix.power,
        None => BindingPower::Default,
    }
}

pub fn parse_primary_expr(_lex: &mut Lexer, token: Token) -> Result<Expr, Error> {
    match token.kind {
        TokenKind::Identifier => Ok(Expr::Identifier(token.value)),
        // raw text: numeric conversion happens in a later stage
        TokenKind::Number => Ok(Expr::NumberLiteral(token.value)),
        TokenKind::String => Ok(Expr::StringLiteral(token.value)),
        _ => Err(Error::at_token(
            &token,
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
        )),
    }
}

/// `!` and unary `-` wrap a full sub-expression, so `!a + b` parses as
/// `Not(Add(a, b))`.
pub fn parse_prefix_expr(lex: &mut Lexer, token: Token) -> Result<Expr, Error> {
    let operand = parse_expression(lex)?;

    match token.kind {
        TokenKind::Bang => Ok(Expr::Not(Box::new(operand))),
        TokenKind::Dash => Ok(Expr::Negate(Box::new(operand))),
        _ => Err(Error::at_token(
            &token,
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
        )),
    }
}

/// Parses a grouping, tuple literal or named tuple literal. The opening
/// `(` is already consumed; what follows the first inner expression
/// decides which of the three this is.
pub fn parse_grouping_expr(lex: &mut Lexer, _token: Token) -> Result<Expr, Error> {
    let first = parse_expression(lex)?;

    match lex.peek_token().kind {
        TokenKind::CloseParen => {
            lex.next_token();
            Ok(first)
        }
        TokenKind::Comma => parse_tuple_literal(first, lex),
        TokenKind::Colon => parse_named_tuple_literal(first, lex),
        _ => {
            let token = advance(lex)?;
            Err(Error::at_token(
                &token,
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from("expected ')'"),
                },
            ))
        }
    }
}

fn parse_tuple_literal(first: Expr, lex: &mut Lexer) -> Result<Expr, Error> {
    let mut elements = vec![first];

    let mut token = advance(lex)?;
    while token.kind == TokenKind::Comma {
        elements.push(parse_expression(lex)?);
        token = advance(lex)?;
    }

    if token.kind != TokenKind::CloseParen {
        return Err(Error::at_token(
            &token,
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected ')'"),
            },
        ));
    }

    Ok(Expr::Tuple(elements))
}

fn parse_named_tuple_literal(first: Expr, lex: &mut Lexer) -> Result<Expr, Error> {
    // the ':' is still pending; the first tag must have parsed as a bare
    // identifier
    let tag = match first {
        Expr::Identifier(name) => name,
        _ => {
            let colon = advance(lex)?;
            return Err(Error::at_token(
                &colon,
                ErrorImpl::UnexpectedTokenDetailed {
                    token: colon.value.clone(),
                    message: String::from("expected an identifier tag before ':'"),
                },
            ));
        }
    };
    lex.next_token(); // consume :

    let expr = parse_expression(lex)?;
    let mut elements = vec![NamedTupleEntry { tag, expr }];

    let mut token = advance(lex)?;
    while token.kind == TokenKind::Comma {
        let tag = expect(lex, TokenKind::Identifier)?.value;
        expect(lex, TokenKind::Colon)?;
        let expr = parse_expression(lex)?;
        elements.push(NamedTupleEntry { tag, expr });
        token = advance(lex)?;
    }

    if token.kind != TokenKind::CloseParen {
        return Err(Error::at_token(
            &token,
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected ')'"),
            },
        ));
    }

    Ok(Expr::NamedTuple(elements))
}

/// Left-associative: the right operand is parsed at the operator's own
/// power, so an equal-powered operator to the right folds in the caller's
/// climb loop instead, giving `Sub(Sub(a, b), c)` for `a - b - c`.
pub fn parse_binary_expr(left: Expr, lex: &mut Lexer, token: Token) -> Result<Expr, Error> {
    let power = INFIX_LOOKUP[&token.kind].power;
    let right = parse_expr(lex, power)?;

    let (left, right) = (Box::new(left), Box::new(right));
    match token.kind {
        TokenKind::Plus => Ok(Expr::Add(left, right)),
        TokenKind::Dash => Ok(Expr::Sub(left, right)),
        TokenKind::Star => Ok(Expr::Mul(left, right)),
        TokenKind::Slash => Ok(Expr::Div(left, right)),
        TokenKind::Percent => Ok(Expr::Mod(left, right)),
        _ => Err(Error::at_token(
            &token,
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
        )),
    }
}

/// The call arrow is right-associative: the argument is parsed one power
/// below `Call`, so `a -> b -> c` is `Call(a, Call(b, c))`.
pub fn parse_call_expr(left: Expr, lex: &mut Lexer, _token: Token) -> Result<Expr, Error> {
    let argument = parse_expr(lex, BindingPower::Assignment)?;

    Ok(Expr::Call {
        callee: Box::new(left),
        argument: Box::new(argument),
    })
}

pub fn parse_unsafe_access_expr(left: Expr, _lex: &mut Lexer, _token: Token) -> Result<Expr, Error> {
    Ok(Expr::UnsafeAccess(Box::new(left)))
}

pub fn parse_array_access_expr(left: Expr, lex: &mut Lexer, _token: Token) -> Result<Expr, Error> {
    let index = parse_expression(lex)?;
    expect(lex, TokenKind::CloseBracket)?;

    Ok(Expr::ArrayAccess {
        target: Box::new(left),
        index: Box::new(index),
    })
}
