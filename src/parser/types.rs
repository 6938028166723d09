//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Simple types (identifiers)
//! - Tuple and named tuple types
//! - Array types with a dimension count
//! - Function types with one argument and an optional return
//!
//! Unlike expression parsing this is a plain recursive grammar dispatched
//! on the leading token; there are no precedence levels to climb.

use crate::{
    ast::types::{NamedTypeEntry, Type},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::parser::{advance, expect};

pub fn parse_type(lex: &mut Lexer) -> Result<Type, Error> {
    let token = advance(lex)?;

    match token.kind {
        TokenKind::Fn => parse_function_type(lex),
        TokenKind::Identifier => Ok(Type::Simple(token.value)),
        TokenKind::OpenParen => parse_paren_type(lex),
        TokenKind::OpenBracket => parse_array_type(lex),
        _ => Err(Error::at_token(
            &token,
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
        )),
    }
}

/// `fn argument` with an optional `-> return`.
fn parse_function_type(lex: &mut Lexer) -> Result<Type, Error> {
    let argument = parse_type(lex)?;

    let ret = if lex.peek_token().kind == TokenKind::Arrow {
        lex.next_token(); // consume ->
        Some(Box::new(parse_type(lex)?))
    } else {
        None
    };

    Ok(Type::Function {
        argument: Box::new(argument),
        ret,
    })
}

/// After `(`: an identifier immediately followed by `:` commits to a named
/// tuple, where every entry must carry a tag; anything else is a plain
/// tuple of comma-separated types.
fn parse_paren_type(lex: &mut Lexer) -> Result<Type, Error> {
    if lex.peek_token().kind == TokenKind::Identifier {
        let first = lex.next_token();

        if lex.peek_token().kind == TokenKind::Colon {
            lex.next_token(); // consume :
            let ty = parse_type(lex)?;
            return parse_named_tuple_type(
                NamedTypeEntry {
                    tag: first.value,
                    ty,
                },
                lex,
            );
        }

        // the identifier was itself the first element type
        return parse_tuple_type(Type::Simple(first.value), lex);
    }

    let first = parse_type(lex)?;
    parse_tuple_type(first, lex)
}

fn parse_tuple_type(first: Type, lex: &mut Lexer) -> Result<Type, Error> {
    let mut elements = vec![first];

    while lex.peek_token().kind == TokenKind::Comma {
        lex.next_token(); // consume ,
        elements.push(parse_type(lex)?);
    }
    expect(lex, TokenKind::CloseParen)?;

    Ok(Type::Tuple(elements))
}

fn parse_named_tuple_type(first: NamedTypeEntry, lex: &mut Lexer) -> Result<Type, Error> {
    let mut elements = vec![first];

    while lex.peek_token().kind == TokenKind::Comma {
        lex.next_token(); // consume ,
        let tag = expect(lex, TokenKind::Identifier)?.value;
        expect(lex, TokenKind::Colon)?;
        let ty = parse_type(lex)?;
        elements.push(NamedTypeEntry { tag, ty });
    }
    expect(lex, TokenKind::CloseParen)?;

    Ok(Type::NamedTuple(elements))
}

/// The leading `[` is already consumed; each further adjacent `[]` pair
/// adds one dimension, then the element type follows.
fn parse_array_type(lex: &mut Lexer) -> Result<Type, Error> {
    expect(lex, TokenKind::CloseBracket)?;

    let mut dimensions = 1;
    while lex.peek_token().kind == TokenKind::OpenBracket {
        lex.next_token(); // consume [
        expect(lex, TokenKind::CloseBracket)?;
        dimensions += 1;
    }

    let element = parse_type(lex)?;
    Ok(Type::Array {
        element: Box::new(element),
        dimensions,
    })
}
