use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Lexer,
    Span,
};

/// Indentation unit, in columns.
pub const INDENT_WIDTH: usize = 4;

/// One node of the block tree: either a dedented source line or a nested
/// block of deeper-indented nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Line(Line),
    Body(Body),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line text with the enclosing indentation stripped.
    pub text: String,
    /// 1-based line number in the original source.
    pub number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub children: Vec<Node>,
}

/// Returns a line's nesting depth and whether its indentation is an exact
/// multiple of [`INDENT_WIDTH`]. A fully blank line counts its whole
/// length as indentation.
fn indent_depth(line: &str) -> (usize, bool) {
    for (i, chr) in line.chars().enumerate() {
        if chr != ' ' {
            return (i / INDENT_WIDTH, i % INDENT_WIDTH == 0);
        }
    }
    (line.len() / INDENT_WIDTH, line.len() % INDENT_WIDTH == 0)
}

/// Splits source text into a tree of lines and nested blocks keyed on
/// indentation depth. Indentation that is not a multiple of
/// [`INDENT_WIDTH`], or that jumps more than one level deeper in a single
/// step, aborts the whole split.
pub fn blockify(source: &str) -> Result<Body, Error> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut idx = 0;

    parse_level(&mut idx, 0, &lines)
}

fn parse_level(idx: &mut usize, level: usize, lines: &[&str]) -> Result<Body, Error> {
    let mut children = vec![];

    while *idx < lines.len() {
        let line = lines[*idx];
        let number = *idx + 1;
        let (indent, aligned) = indent_depth(line);

        if !aligned {
            let span = Span::new(0, line.len());
            return Err(Error::new(ErrorImpl::InvalidIndentation, span).on_line(number));
        }

        if indent == level {
            children.push(Node::Line(Line {
                text: String::from(&line[level * INDENT_WIDTH..]),
                number,
            }));
            *idx += 1;
        } else if indent == level + 1 {
            let child = parse_level(idx, level + 1, lines)?;
            children.push(Node::Body(child));
        } else if indent > level {
            let span = Span::new(0, line.len());
            return Err(Error::new(ErrorImpl::IndentationJump, span).on_line(number));
        } else {
            // shallower line: hand it back to the enclosing level
            break;
        }
    }

    Ok(Body { children })
}

/// Cursor over one [`Body`]'s children, yielding lines as token streams
/// and nested blocks as sub-navigators.
pub struct Navigator<'a> {
    idx: usize,
    body: &'a Body,
}

impl<'a> Navigator<'a> {
    pub fn new(body: &'a Body) -> Navigator<'a> {
        Navigator { idx: 0, body }
    }

    /// If the node at the cursor is a line, advances past it and returns a
    /// fresh lexer over its text. Returns `None` (without advancing) when
    /// the cursor sits on a block or past the end.
    pub fn take_line(&mut self) -> Option<Lexer> {
        match self.body.children.get(self.idx)? {
            Node::Line(line) => {
                self.idx += 1;
                Some(Lexer::for_line(&line.text, line.number))
            }
            Node::Body(_) => None,
        }
    }

    /// If the node at the cursor is a block, advances past it and returns
    /// a navigator over its children. Returns `None` (without advancing)
    /// when the cursor sits on a line or past the end.
    pub fn take_block(&mut self) -> Option<Navigator<'a>> {
        match self.body.children.get(self.idx)? {
            Node::Body(body) => {
                self.idx += 1;
                Some(Navigator::new(body))
            }
            Node::Line(_) => None,
        }
    }
}
