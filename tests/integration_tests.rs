//! Integration tests for the end-to-end front end.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through structural splitting, scanning and parsing.

use tern::ast::declarations::Declaration;
use tern::ast::types::Type;
use tern::lexer::lexer::tokenize;
use tern::parser::parser::parse_source;
use tern::structure::structure::blockify;

#[test]
fn test_parse_small_module() {
    let source = "\
use std::collections
use core::mem

type point = (x: int, y: int)
type grid = [][]point

fn origin -> point
    (x: 0, y: 0)

fn translate (p: point, d: point) -> point

fn scale s: int -> fn point -> point
";

    let unit = parse_source(source).unwrap();

    assert_eq!(unit.uses.len(), 2);
    assert_eq!(unit.uses[0].path, vec!["std", "collections"]);
    assert_eq!(unit.uses[1].path, vec!["core", "mem"]);

    assert_eq!(unit.declarations.len(), 5);
    match &unit.declarations[1] {
        Declaration::TypeAlias(alias) => {
            assert_eq!(alias.name, "grid");
            assert_eq!(
                alias.ty,
                Type::Array {
                    element: Box::new(Type::Simple(String::from("point"))),
                    dimensions: 2,
                }
            );
        }
        other => panic!("expected a type alias, got {:?}", other),
    }

    match &unit.declarations[2] {
        Declaration::Function(function) => {
            assert_eq!(function.name, "origin");
            assert!(function.parameters.is_empty());
            assert_eq!(function.return_type, Some(Type::Simple(String::from("point"))));
            assert!(function.body.is_none());
        }
        other => panic!("expected a function, got {:?}", other),
    }

    match &unit.declarations[4] {
        Declaration::Function(function) => {
            assert_eq!(function.parameters.len(), 1);
            assert!(matches!(
                function.return_type,
                Some(Type::Function { .. })
            ));
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_declarations_keep_source_order() {
    let source = "fn b\nfn a\ntype t = int";
    let unit = parse_source(source).unwrap();

    let names: Vec<&str> = unit
        .declarations
        .iter()
        .map(|decl| match decl {
            Declaration::Function(function) => function.name.as_str(),
            Declaration::TypeAlias(alias) => alias.name.as_str(),
        })
        .collect();
    assert_eq!(names, vec!["b", "a", "t"]);
}

#[test]
fn test_first_error_aborts_the_unit() {
    let source = "fn good\nuse broken::\nfn never_reached";
    let err = parse_source(source).unwrap_err();

    assert_eq!(err.get_line(), Some(2));
}

#[test]
fn test_structural_error_aborts_before_parsing() {
    let source = "fn good\n  misaligned";
    let err = parse_source(source).unwrap_err();

    assert_eq!(err.get_error_name(), "InvalidIndentation");
    assert_eq!(err.get_line(), Some(2));
}

#[test]
fn test_scan_entry_point_matches_split_entry_point() {
    // the three public entry points compose: scan, split, parse
    let source = "fn add (x: int, y: int) -> int";

    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.len(), 14);

    let tree = blockify(source).unwrap();
    assert_eq!(tree.children.len(), 1);

    assert!(parse_source(source).is_ok());
}
