use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Pull-based scanner over one line (or any string).
///
/// Tokens are computed lazily: nothing is scanned until `next_token` or
/// `peek_token` is called, and at most one token is buffered for peeking.
/// The stream ends with a single `EOF` token, or with a single `Error`
/// token if an invalid character or unterminated string is found.
pub struct Lexer {
    source: Vec<char>,
    /// Start of the token currently being scanned; advanced past skipped
    /// whitespace so spans never cover it.
    start: usize,
    pos: usize,
    peeked: Option<Token>,
    finished: bool,
    line: Option<usize>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            start: 0,
            pos: 0,
            peeked: None,
            finished: false,
            line: None,
        }
    }

    /// A lexer for one dedented line of a block tree, remembering the
    /// 1-based source line for diagnostics.
    pub fn for_line(source: &str, number: usize) -> Lexer {
        let mut lexer = Lexer::new(source);
        lexer.line = Some(number);
        lexer
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token(),
        }
    }

    /// Returns the next token without consuming it. Exactly one token of
    /// lookahead is held.
    pub fn peek_token(&mut self) -> &Token {
        if self.peeked.is_none() {
            let token = self.scan_token();
            self.peeked = Some(token);
        }
        self.peeked.as_ref().unwrap()
    }

    fn peek_char(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn read_char(&mut self) -> Option<char> {
        let chr = self.peek_char();
        if chr.is_some() {
            self.pos += 1;
        }
        chr
    }

    fn accept(&mut self, want: char) -> bool {
        if self.peek_char() == Some(want) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn emit(&mut self, kind: TokenKind) -> Token {
        let value: String = self.source[self.start..self.pos].iter().collect();
        let span = Span::new(self.start, self.pos);
        self.start = self.pos;
        Token { kind, value, span }
    }

    fn error_token(&mut self, message: String) -> Token {
        let span = Span::new(self.start, self.pos);
        self.start = self.pos;
        self.finished = true;
        Token {
            kind: TokenKind::Error,
            value: message,
            span,
        }
    }

    fn scan_token(&mut self) -> Token {
        if self.finished {
            return Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span::new(self.pos, self.pos),
            };
        }

        while let Some(' ' | '\t' | '\r' | '\n') = self.peek_char() {
            self.pos += 1;
            self.start = self.pos;
        }

        let chr = match self.read_char() {
            Some(chr) => chr,
            None => {
                self.finished = true;
                return self.emit(TokenKind::EOF);
            }
        };

        match chr {
            '+' => self.emit(TokenKind::Plus),
            '-' => {
                if self.accept('>') {
                    self.emit(TokenKind::Arrow)
                } else {
                    self.emit(TokenKind::Dash)
                }
            }
            '/' => self.emit(TokenKind::Slash),
            '*' => self.emit(TokenKind::Star),
            '%' => self.emit(TokenKind::Percent),

            '!' => {
                if self.accept('=') {
                    self.emit(TokenKind::NotEquals)
                } else {
                    self.emit(TokenKind::Bang)
                }
            }
            '|' => self.emit(TokenKind::Pipe),
            '.' => self.emit(TokenKind::Dot),
            ',' => self.emit(TokenKind::Comma),
            ':' => {
                if self.accept(':') {
                    self.emit(TokenKind::ModSep)
                } else {
                    self.emit(TokenKind::Colon)
                }
            }

            '>' => {
                if self.accept('=') {
                    self.emit(TokenKind::GreaterEquals)
                } else {
                    self.emit(TokenKind::Greater)
                }
            }
            '<' => {
                if self.accept('=') {
                    self.emit(TokenKind::LessEquals)
                } else {
                    self.emit(TokenKind::Less)
                }
            }
            '=' => {
                if self.accept('=') {
                    self.emit(TokenKind::Equals)
                } else {
                    self.emit(TokenKind::Assignment)
                }
            }

            '[' => self.emit(TokenKind::OpenBracket),
            ']' => self.emit(TokenKind::CloseBracket),
            '(' => self.emit(TokenKind::OpenParen),
            ')' => self.emit(TokenKind::CloseParen),

            '"' => self.read_string(),

            chr if is_ident_start(chr) => self.read_ident(),
            chr if chr.is_ascii_digit() => self.read_number(),

            chr => self.error_token(format!("unexpected character: '{}'", chr)),
        }
    }

    fn read_ident(&mut self) -> Token {
        while self.peek_char().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        let ident: String = self.source[self.start..self.pos].iter().collect();

        match RESERVED_LOOKUP.get(ident.as_str()) {
            Some(keyword) => self.emit(*keyword),
            None => self.emit(TokenKind::Identifier),
        }
    }

    fn read_number(&mut self) -> Token {
        // integers only: no sign, decimal point or exponent
        while self.peek_char().is_some_and(|chr| chr.is_ascii_digit()) {
            self.pos += 1;
        }
        self.emit(TokenKind::Number)
    }

    fn read_string(&mut self) -> Token {
        loop {
            match self.read_char() {
                Some('"') => break,
                Some(_) => {}
                None => return self.error_token(String::from("unterminated string literal")),
            }
        }

        // quotes stay inside the span but out of the value
        let value: String = self.source[self.start + 1..self.pos - 1].iter().collect();
        let span = Span::new(self.start, self.pos);
        self.start = self.pos;
        Token {
            kind: TokenKind::String,
            value,
            span,
        }
    }
}

fn is_ident_start(chr: char) -> bool {
    chr.is_ascii_alphabetic() || chr == '_'
}

fn is_ident_char(chr: char) -> bool {
    chr.is_ascii_alphanumeric() || chr == '_'
}

/// Scans a whole string eagerly, stopping at the first lexical error.
/// The returned tokens end with a single `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Error => {
                return Err(Error::new(
                    ErrorImpl::LexicalError {
                        message: token.value,
                    },
                    token.span,
                ))
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
