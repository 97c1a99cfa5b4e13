//! Utility macros for the parser.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_RULE!` - Creates a scanner dispatch Rule
//! - `MK_LINK!` - Creates a Link node
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a scanner dispatch rule.
///
/// The pattern is anchored at the current offset, so only matches starting
/// exactly there count.
///
/// # Arguments
///
/// * `$line_start` - Whether the rule applies at line starts (and only there)
/// * `$pattern` - The regex pattern, as a string literal
/// * `$handler` - The RuleHandler run on a match
///
/// # Example
///
/// ```ignore
/// MK_RULE!(false, r"\(", open_region)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($line_start:expr, $pattern:literal, $handler:expr) => {
        Rule {
            line_start: $line_start,
            regex: Regex::new(concat!("^(?:", $pattern, ")")).unwrap(),
            handler: $handler,
        }
    };
}

/// Creates a Link node.
///
/// # Arguments
///
/// * `$name` - The symbol
/// * `$infix` - Whether the link acts as an infix operator
/// * `$location` - The source location
///
/// # Example
///
/// ```ignore
/// let separator = MK_LINK!("\n", true, block.get_location().after());
/// ```
#[macro_export]
macro_rules! MK_LINK {
    ($name:expr, $infix:expr, $location:expr) => {
        Node::Link(Link::new($name, $infix, $location))
    };
}
