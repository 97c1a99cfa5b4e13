//! Parser module for building the syntax tree.
//!
//! This module turns the scanner's output into a tree of Constant, Link and
//! Expression nodes. There is no grammar beyond operator precedence:
//!
//! - Region parsing (top level, parentheses, indented blocks)
//! - Expression building by precedence climbing over a fixed strength table
//! - Juxtaposition as function application
//! - Indented blocks as statement sequences or trailing argument lists
//!
//! The builder works online: each new item is merged into the tree built so
//! far by rotating along its right edge.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
