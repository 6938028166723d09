//! Declaration parsing: the driver that turns a block tree into a
//! compilation unit.
//!
//! The parser pulls one line at a time from a [`Navigator`], tokenizes it,
//! and dispatches on the leading keyword:
//!
//! - `use` — a dotted import path
//! - `fn` — a function signature (bodies are nested blocks and stay
//!   unparsed)
//! - `type` — a type alias
//!
//! The first error from any sub-parser aborts the whole unit. Errors are
//! stamped with the source line they came from before propagating.

use crate::{
    ast::declarations::{CompilationUnit, Declaration, Function, Parameter, TypeAlias, UseDecl},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    structure::structure::{blockify, Navigator},
};

use super::types::parse_type;

/// What to do with a top-level line whose first token is not a recognized
/// declaration keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelPolicy {
    /// Skip the line, like the language has always done.
    Lenient,
    /// Report a positioned error.
    Strict,
}

/// Consumes and returns the next token, turning a lexical error token
/// into a proper error value.
pub(crate) fn advance(lex: &mut Lexer) -> Result<Token, Error> {
    let token = lex.next_token();
    if token.kind == TokenKind::Error {
        return Err(Error::new(
            ErrorImpl::LexicalError {
                message: token.value,
            },
            token.span,
        ));
    }
    Ok(token)
}

/// Consumes the next token, requiring it to be of the given kind.
pub(crate) fn expect(lex: &mut Lexer, expected: TokenKind) -> Result<Token, Error> {
    let token = advance(lex)?;
    if token.kind != expected {
        return Err(Error::at_token(
            &token,
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: format!("expected {}", expected),
            },
        ));
    }
    Ok(token)
}

/// Parses a whole source string into a compilation unit.
pub fn parse_source(source: &str) -> Result<CompilationUnit, Error> {
    let tree = blockify(source)?;
    let mut nav = Navigator::new(&tree);
    parse(&mut nav)
}

pub fn parse(nav: &mut Navigator<'_>) -> Result<CompilationUnit, Error> {
    parse_with_policy(nav, TopLevelPolicy::Lenient)
}

pub fn parse_with_policy(
    nav: &mut Navigator<'_>,
    policy: TopLevelPolicy,
) -> Result<CompilationUnit, Error> {
    let mut unit = CompilationUnit {
        uses: vec![],
        declarations: vec![],
    };

    loop {
        if let Some(mut lex) = nav.take_line() {
            let line = lex.line();
            parse_top_level(&mut lex, policy, &mut unit).map_err(|err| match line {
                Some(number) => err.on_line(number),
                None => err,
            })?;
            continue;
        }

        // a nested block here is a function body; body parsing is not
        // implemented, so the block is skipped wholesale
        if nav.take_block().is_some() {
            continue;
        }

        break;
    }

    Ok(unit)
}

fn parse_top_level(
    lex: &mut Lexer,
    policy: TopLevelPolicy,
    unit: &mut CompilationUnit,
) -> Result<(), Error> {
    let token = advance(lex)?;

    match token.kind {
        TokenKind::Use => unit.uses.push(parse_use_stmt(lex)?),
        TokenKind::Fn => unit
            .declarations
            .push(Declaration::Function(parse_function(lex)?)),
        TokenKind::Type => unit
            .declarations
            .push(Declaration::TypeAlias(parse_type_decl(lex)?)),
        TokenKind::EOF => {} // blank line
        _ => {
            if policy == TopLevelPolicy::Strict {
                return Err(Error::at_token(
                    &token,
                    ErrorImpl::UnexpectedTopLevel {
                        token: token.value.clone(),
                    },
                ));
            }
        }
    }

    Ok(())
}

/// `use a::b::c` — a strict alternation of identifiers and `::`,
/// terminated by the end of the line.
fn parse_use_stmt(lex: &mut Lexer) -> Result<UseDecl, Error> {
    let mut path = vec![expect(lex, TokenKind::Identifier)?.value];

    while lex.peek_token().kind == TokenKind::ModSep {
        lex.next_token(); // consume ::
        path.push(expect(lex, TokenKind::Identifier)?.value);
    }
    expect(lex, TokenKind::EOF)?;

    Ok(UseDecl { path })
}

fn parse_parameter(lex: &mut Lexer) -> Result<Parameter, Error> {
    let name = expect(lex, TokenKind::Identifier)?.value;
    expect(lex, TokenKind::Colon)?;
    let ty = parse_type(lex)?;

    Ok(Parameter { name, ty })
}

/// `fn name`, then no parameters, one bare `name: type`, or a
/// parenthesized non-empty list, then an optional `-> type`.
fn parse_function(lex: &mut Lexer) -> Result<Function, Error> {
    let name = expect(lex, TokenKind::Identifier)?.value;

    let mut parameters = vec![];
    match lex.peek_token().kind {
        TokenKind::Identifier => parameters.push(parse_parameter(lex)?),
        TokenKind::OpenParen => {
            lex.next_token(); // consume (

            parameters.push(parse_parameter(lex)?);
            while lex.peek_token().kind == TokenKind::Comma {
                lex.next_token();
                parameters.push(parse_parameter(lex)?);
            }

            expect(lex, TokenKind::CloseParen)?;
        }
        _ => {}
    }

    let return_type = if lex.peek_token().kind == TokenKind::Arrow {
        lex.next_token(); // consume ->
        Some(parse_type(lex)?)
    } else {
        None
    };
    expect(lex, TokenKind::EOF)?;

    Ok(Function {
        name,
        parameters,
        return_type,
        body: None,
    })
}

/// `type name = type`.
fn parse_type_decl(lex: &mut Lexer) -> Result<TypeAlias, Error> {
    let name = expect(lex, TokenKind::Identifier)?.value;
    expect(lex, TokenKind::Assignment)?;
    let ty = parse_type(lex)?;
    expect(lex, TokenKind::EOF)?;

    Ok(TypeAlias { name, ty })
}
