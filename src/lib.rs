#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::{parse, parse_with_name};

/// Source span of a node: byte offsets into the buffer, the name of the
/// source and the text of the line the span starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub file: Rc<String>,
    pub first_line: Rc<str>,
}

impl Location {
    /// A zero-width span placed right after this one.
    pub fn after(&self) -> Self {
        Location {
            start: self.end,
            end: self.end,
            file: Rc::clone(&self.file),
            first_line: Rc::clone(&self.first_line),
        }
    }
}

/// Returns the 1-based line number, the text of that line (without its
/// newline) and the 1-based column of `position`.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(content.len());
    let line_start = content[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line_end = content[pos..].find('\n').map_or(content.len(), |i| pos + i);
    let line_number = 1 + content[..pos].matches('\n').count();
    let column = content[line_start..pos].chars().count() + 1;

    (line_number, String::from(&content[line_start..line_end]), column)
}


pub fn display_error(error: &Error) {
    /*
        Error: UnexpectedDedent (unexpected dedent)
        -> main.dg
           |
        20 | a = b
           | ----^
    */

    let position = error.get_position();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("Error: {} ({})", error.get_error_name(), error.message());
    eprintln!("-> {}", position.file);
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&position.text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("{:>padding$} {}", "=", tip);
    }
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
