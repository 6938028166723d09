#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod structure;

/// Half-open character range `[start, end)` within one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

pub fn display_error(error: &Error, file: &str, source: &str) {
    /*
        Error: UnexpectedTokenDetailed (unexpected token `::`, expected Identifier)
        -> demo.tern
           |
         3 | use alpha::
           | ----------^
    */

    match error.get_tip() {
        ErrorTip::None => println!("Error: {}", error.get_error_name()),
        tip => println!("Error: {} ({})", error.get_error_name(), tip),
    }
    println!("-> {}", file);

    let line_number = match error.get_line() {
        Some(number) => number,
        None => return,
    };
    let line_text = source.split('\n').nth(line_number - 1).unwrap_or("");

    let line_string = line_number.to_string();
    let padding = line_string.len() + 2;
    println!("{:>padding$}", "|");

    let (line_text_dedented, _removed) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_dedented);

    // spans are relative to the dedented line, so the caret lines up as-is
    let arrows = error.get_span().start + 1;
    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
