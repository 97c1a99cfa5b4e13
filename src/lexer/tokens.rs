use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::ast::ast::Node;

lazy_static! {
    /// Words that act as infix operators even though they are spelled as names.
    pub static ref INFIX_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("or");
        set.insert("and");
        set.insert("in");
        set.insert("is");
        set.insert("where");
        set
    };
}

/// Structural boundary produced by the scanner: `")"` for a closing
/// parenthesis, `""` for end of input or for one closed indentation level.
/// Never part of a finished tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Internal {
    pub value: String,
    pub start: usize,
}

impl Internal {
    pub fn new(value: impl Into<String>, start: usize) -> Self {
        Internal {
            value: value.into(),
            start,
        }
    }
}

/// One item pulled from the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Node(Node),
    Internal(Internal),
}

impl Token {
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Node(node) if node.is_separator())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Node(node) => write!(f, "{}", node),
            Token::Internal(internal) => write!(f, "<internal {:?}>", internal.value),
        }
    }
}
