//! Error types and error handling for the parser.
//!
//! This module defines the single failure channel used by the scanner,
//! the indentation tracker and the region parser. It includes:
//!
//! - Error structures carrying the exact source position
//! - Lexical, indentation and structural error variants
//! - Error names and suggestions for diagnostics

pub mod errors;
