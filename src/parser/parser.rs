//! Region parser and the public entry points.
//!
//! A region is the top level, the inside of a pair of parentheses or an
//! indented block. Each one is parsed by a separate `parse_region` call that
//! pulls items from the shared lexer until it sees its terminator.

use tracing::{debug, trace};

use crate::{
    ast::ast::{Constant, Link, Literal, Node},
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::Token},
};

use super::expr::parse_infix;

/// Parses one region starting at offset `start`. `opened_at` is the offset of
/// the `(` or indentation run that opened it.
///
/// The region ends at an `Internal` marker whose value is in `terminators`;
/// any other marker is an error. Two items in a row are joined by the empty
/// (juxtaposition) operator, and line breaks right at the start are skipped.
/// Unless `preserve_closed_state` is set the result is closed; indented
/// blocks keep it open so a later statement can still attach to them.
pub fn parse_region(
    lexer: &mut Lexer,
    opened_at: usize,
    start: usize,
    terminators: &[&str],
    preserve_closed_state: bool,
) -> Result<Node, Error> {
    lexer.enter_region(opened_at)?;
    trace!(start, ?terminators, "region opened");

    let mut object = Node::Constant(Constant::new(Literal::None, lexer.location(start, start)));
    let mut can_join = false;

    loop {
        match lexer.next_token()? {
            Token::Internal(marker) => {
                if !terminators.iter().any(|terminator| *terminator == marker.value) {
                    return Err(lexer.unexpected(&marker));
                }
                break;
            }
            Token::Node(item) if can_join => {
                let juxtaposition = Link::new("", true, object.get_location().after());
                object = parse_infix(lexer, object, juxtaposition, Token::Node(item))?;
            }
            Token::Node(item) if !item.is_separator() => {
                object = item;
                can_join = true;
            }
            Token::Node(_) => {}
        }
    }

    if !preserve_closed_state {
        object.close();
    }

    lexer.leave_region();

    trace!(start, end = lexer.offset, "region closed");
    Ok(object)
}

/// Parses `source` into a single closed tree. The source name in errors and
/// locations is `<string>`.
pub fn parse(source: impl Into<String>) -> Result<Node, Error> {
    parse_with_name(source, None)
}

/// Parses `source`, naming it `file` in errors and locations.
pub fn parse_with_name(source: impl Into<String>, file: Option<String>) -> Result<Node, Error> {
    let mut lexer = Lexer::new(source.into(), file);
    debug!(file = %lexer.file(), length = lexer.source().len(), "parse started");

    // The first line always opens the top-level block, which only ends at
    // the end of input.
    let mut root = match lexer.next_token()? {
        Token::Node(root) => root,
        Token::Internal(marker) => return Err(lexer.unexpected(&marker)),
    };
    root.close();

    debug!(file = %lexer.file(), "parse finished");
    Ok(root)
}
