//! Off-side rule handling.
//!
//! A line indented deeper than the current level opens a block that is
//! parsed right away as its own region; a line indented shallower closes
//! one region per level it leaves by queueing an empty `Internal` marker.

use std::cmp::Ordering;

use tracing::trace;

use crate::{
    ast::ast::{Link, Node},
    errors::errors::{Error, ErrorImpl},
    parser::parser::parse_region,
    MK_LINK,
};

use super::{
    lexer::{Lexeme, Lexer},
    tokens::{Internal, Token},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentChange {
    /// The new width was pushed.
    Deeper,
    Same,
    /// This many levels were popped.
    Shallower(usize),
}

/// Stack of open indentation widths. The bottom entry is a `-1` sentinel so
/// the very first line always opens a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentTracker {
    levels: Vec<isize>,
}

impl Default for IndentTracker {
    fn default() -> Self {
        IndentTracker { levels: vec![-1] }
    }
}

impl IndentTracker {
    /// Open widths, outermost first.
    pub fn levels(&self) -> &[isize] {
        &self.levels
    }

    /// Compares `width` with the innermost level and updates the stack.
    /// Returns `None` when dedenting to a width that was never pushed.
    pub fn measure(&mut self, width: usize) -> Option<IndentChange> {
        let width = width as isize;
        let top = *self.levels.last()?;

        match width.cmp(&top) {
            Ordering::Greater => {
                self.levels.push(width);
                Some(IndentChange::Deeper)
            }
            Ordering::Equal => Some(IndentChange::Same),
            Ordering::Less => {
                let mut closed = 0;
                while let Some(level) = self.levels.pop() {
                    if level == width {
                        self.levels.push(level);
                        return Some(IndentChange::Shallower(closed));
                    }
                    closed += 1;
                }
                None
            }
        }
    }
}

/// Line-start rule handler: `lexeme` is the run of leading spaces.
pub fn indent(lexer: &mut Lexer, lexeme: &Lexeme) -> Result<Option<Token>, Error> {
    let width = lexeme.text().len();

    match lexer.indentation.measure(width) {
        Some(IndentChange::Deeper) => {
            trace!(width, offset = lexeme.start(), "indented block opened");

            let mut block = parse_region(lexer, lexeme.start(), lexeme.end(), &[""], true)?;
            block.mark_indented();

            // Whatever follows treats the block as one finished operand.
            let separator = MK_LINK!("\n", true, block.get_location().after());
            lexer.push_front(Token::Node(separator));

            trace!(width, "indented block closed");
            Ok(Some(Token::Node(block)))
        }
        Some(IndentChange::Same) => Ok(None),
        Some(IndentChange::Shallower(levels)) => {
            trace!(width, levels, "dedent");
            for _ in 0..levels {
                lexer.push_front(Token::Internal(Internal::new("", lexeme.end())));
            }
            Ok(None)
        }
        None => Err(lexer.error(ErrorImpl::NoMatchingIndentation, lexeme.start())),
    }
}
