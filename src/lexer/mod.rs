//! Lexical analysis module for the parser.
//!
//! The scanner is pull-based: every request runs an ordered table of regex
//! rules against the current offset and returns the first item produced.
//! It handles:
//!
//! - Numbers, strings, names and operator symbols
//! - Indentation measured at line starts (see `indentation`)
//! - Parenthesised regions, which are parsed on the spot
//! - A pushback queue for the expression builder's lookahead

pub mod indentation;
pub mod lexer;
pub mod literals;
pub mod tokens;
