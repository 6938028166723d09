use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::Token;
use crate::Span;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
    line: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
            line: None,
        }
    }

    /// Positions an error at the span of the offending token.
    pub fn at_token(token: &Token, error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, token.span)
    }

    /// Attaches a 1-based source line number, keeping an existing one.
    pub fn on_line(mut self, line: usize) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_line(&self) -> Option<usize> {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexicalError { .. } => "LexicalError",
            ErrorImpl::InvalidIndentation => "InvalidIndentation",
            ErrorImpl::IndentationJump => "IndentationJump",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedTopLevel { .. } => "UnexpectedTopLevel",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::LexicalError { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::InvalidIndentation => {
                ErrorTip::Suggestion(String::from("indent in steps of 4 spaces"))
            }
            ErrorImpl::IndentationJump => ErrorTip::Suggestion(String::from(
                "a nested block may only indent one level past its parent",
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("unexpected token `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("unexpected token `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedTopLevel { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a top-level declaration",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "error at line {}, {}..{}: {}",
                line, self.span.start, self.span.end, self.internal_error
            ),
            None => write!(
                f,
                "error at {}..{}: {}",
                self.span.start, self.span.end, self.internal_error
            ),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("{message}")]
    LexicalError { message: String },
    #[error("indentation is not a multiple of 4 columns")]
    InvalidIndentation,
    #[error("indentation jumps more than one level")]
    IndentationJump,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected top-level token: {token:?}")]
    UnexpectedTopLevel { token: String },
}
