use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::lexer::lexer::MAX_NESTING_DEPTH;

/// Where a failure was detected, already resolved to line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPosition {
    pub file: Rc<String>,
    pub offset: usize,
    /// 1-based
    pub line: usize,
    /// 1-based
    pub column: usize,
    /// The offending source line, without its newline.
    pub text: String,
}

#[derive(Error, Debug, Clone)]
#[error("{internal_error} ({}:{}:{})", .position.file, .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: ErrorPosition,
}

/// The three failure families a parse can abort with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Indentation,
    Structural,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: ErrorPosition) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &ErrorPosition {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::InvalidInput { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::InvalidLiteral { .. } => ErrorKind::Lexical,
            ErrorImpl::NoMatchingIndentation => ErrorKind::Indentation,
            ErrorImpl::UnexpectedBlockDelimiter { .. }
            | ErrorImpl::UnexpectedEof
            | ErrorImpl::UnexpectedDedent
            | ErrorImpl::TooDeeplyNested => ErrorKind::Structural,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidInput { .. } => "InvalidInput",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            ErrorImpl::NoMatchingIndentation => "NoMatchingIndentation",
            ErrorImpl::UnexpectedBlockDelimiter { .. } => "UnexpectedBlockDelimiter",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::UnexpectedDedent => "UnexpectedDedent",
            ErrorImpl::TooDeeplyNested => "TooDeeplyNested",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidInput { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "unexpected EOF while reading a string literal, is a closing quote missing?",
            )),
            ErrorImpl::InvalidLiteral { token, message } => {
                ErrorTip::Suggestion(format!("invalid literal `{}`: {}", token, message))
            }
            ErrorImpl::NoMatchingIndentation => ErrorTip::Suggestion(String::from(
                "no matching indentation level, dedent to a column used by an enclosing block",
            )),
            ErrorImpl::UnexpectedBlockDelimiter { token } => ErrorTip::Suggestion(format!(
                "unexpected block delimiter `{}`, is an opening parenthesis missing?",
                token
            )),
            ErrorImpl::UnexpectedEof => ErrorTip::Suggestion(String::from(
                "unexpected EOF, is a closing parenthesis missing?",
            )),
            ErrorImpl::UnexpectedDedent => ErrorTip::Suggestion(String::from(
                "unexpected dedent, close the parenthesis before leaving the block",
            )),
            ErrorImpl::TooDeeplyNested => ErrorTip::Suggestion(format!(
                "too many nested blocks, at most {} parentheses and indentation levels may be open",
                MAX_NESTING_DEPTH
            )),
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid input")]
    InvalidInput { token: String },
    #[error("unexpected EOF while reading a string literal")]
    UnterminatedString,
    #[error("{message}")]
    InvalidLiteral { token: String, message: String },
    #[error("no matching indentation level")]
    NoMatchingIndentation,
    #[error("unexpected block delimiter")]
    UnexpectedBlockDelimiter { token: String },
    #[error("unexpected EOF")]
    UnexpectedEof,
    #[error("unexpected dedent")]
    UnexpectedDedent,
    #[error("too many nested blocks")]
    TooDeeplyNested,
}
