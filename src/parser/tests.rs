//! Unit tests for the parser module.
//!
//! This module contains tests for tree building including:
//! - Operator precedence and associativity
//! - Flattening of separators and tuples
//! - Juxtaposition and postfix operators
//! - Indented blocks as statements and as arguments
//! - Parenthesised regions
//! - Structural errors

use pretty_assertions::assert_eq;

use super::{
    lookups::{binding_strength, has_priority, is_flattened, is_unary, BindingStrength},
    parser::{parse, parse_with_name},
};
use crate::{
    ast::ast::{Literal, Node},
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::lexer::MAX_NESTING_DEPTH,
};

fn tree(source: &str) -> String {
    parse(source).unwrap().to_string()
}

#[test]
fn test_binding_strength_table() {
    assert_eq!(binding_strength("+"), BindingStrength::new(-6, -6));
    assert_eq!(binding_strength("**"), BindingStrength::new(-3, -4));
    assert_eq!(binding_strength("->"), BindingStrength::new(1, -18));
    assert_eq!(binding_strength("where"), BindingStrength::new(-17, -18));
    assert_eq!(binding_strength("\n"), BindingStrength::new(-23, -23));
    // Anything else sits between arithmetic and comparison.
    assert_eq!(binding_strength("<$>"), BindingStrength::new(-7, -7));
}

#[test]
fn test_has_priority() {
    assert!(has_priority("*", "+"));
    assert!(!has_priority("+", "*"));
    assert!(!has_priority("+", "+"));
    assert!(has_priority("**", "**"));
    assert!(has_priority("=", "="));
    assert!(has_priority(".", ""));
}

#[test]
fn test_operator_sets() {
    assert!(is_flattened(","));
    assert!(is_flattened(""));
    assert!(is_flattened("\n"));
    assert!(!is_flattened("+"));
    assert!(is_unary("!"));
    assert!(!is_unary("-"));
}

#[test]
fn test_precedence() {
    assert_eq!(tree("1 + 2 * 3"), r#"("+" 1 ("*" 2 3))"#);
    assert_eq!(tree("1 * 2 + 3"), r#"("+" ("*" 1 2) 3)"#);
    assert_eq!(tree("a or b and c"), r#"("or" a ("and" b c))"#);
    assert_eq!(tree("a < b | c"), r#"("|" ("<" a b) c)"#);
}

#[test]
fn test_associativity() {
    assert_eq!(tree("a - b - c"), r#"("-" ("-" a b) c)"#);
    assert_eq!(tree("a ** b ** c"), r#"("**" a ("**" b c))"#);
    assert_eq!(tree("x = y = z"), r#"("=" x ("=" y z))"#);
    assert_eq!(tree("a -> b -> c"), r#"("->" a ("->" b c))"#);
    assert_eq!(tree("a.b.c"), r#"("." ("." a b) c)"#);
}

#[test]
fn test_flatten() {
    assert_eq!(tree("a, b, c"), r#"("," a b c)"#);
    assert_eq!(tree("a\nb\nc"), r#"("\n" a b c)"#);
}

#[test]
fn test_juxtaposition() {
    assert_eq!(tree("f x y"), r#"("" f x y)"#);
    assert_eq!(tree("f x + 1"), r#"("+" ("" f x) 1)"#);
    assert_eq!(tree("a + f x"), r#"("+" a ("" f x))"#);
    assert_eq!(tree("f a.b"), r#"("" f ("." a b))"#);
    assert_eq!(tree("print $ f x"), r#"("$" print ("" f x))"#);
}

#[test]
fn test_conditional() {
    assert_eq!(tree("a if b else c"), r#"("else" ("if" a b) c)"#);
    assert_eq!(tree("x = a if b"), r#"("if" ("=" x a) b)"#);
}

#[test]
fn test_postfix_call() {
    assert_eq!(tree("f !"), r#"("!" f)"#);
    assert_eq!(tree("f ! x"), r#"("" ("!" f) x)"#);
}

#[test]
fn test_operator_without_rhs() {
    assert_eq!(tree("(a +)"), r#"("+" a)"#);
    assert_eq!(tree("a +\nb"), r#"("\n" ("+" a) b)"#);
}

#[test]
fn test_parentheses() {
    assert_eq!(tree("(a + b) * c"), r#"("*" ("+" a b) c)"#);
    assert_eq!(tree("f (g x) y"), r#"("" f ("" g x) y)"#);
    assert_eq!(tree("()"), "None");
}

#[test]
fn test_operator_section() {
    let root = parse("(+)").unwrap();
    let link = root.as_link().unwrap();

    assert!(link.is("+"));
    assert!(link.closed);
    assert_eq!(tree("(+) 1 2"), r#"("" + 1 2)"#);
}

#[test]
fn test_empty_region() {
    let root = parse("f ()").unwrap();
    let call = root.as_expression().unwrap();

    match &call.operands[1] {
        Node::Constant(constant) => {
            assert_eq!(constant.value, Literal::None);
            assert_eq!(constant.location.start, 3);
            assert_eq!(constant.location.end, 3);
        }
        other => panic!("expected an empty constant, got {}", other),
    }
}

#[test]
fn test_statements() {
    assert_eq!(
        tree("a = b\nc = d"),
        r#"("\n" ("=" a b) ("=" c d))"#
    );
}

#[test]
fn test_block_as_arguments() {
    assert_eq!(tree("f x\n  y\n  z\n"), r#"("" f x y z)"#);
    assert_eq!(tree("f\n  g x"), r#"("" f ("" g x))"#);
}

#[test]
fn test_block_as_operand() {
    assert_eq!(tree("x =\n  a\n  b"), r#"("=" x ("\n" a b))"#);
    assert_eq!(
        tree("a = \n  b\n  c\nw"),
        r#"("\n" ("=" a ("\n" b c)) w)"#
    );
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        tree("f\n  g\n    h\n  i\nj"),
        r#"("\n" ("" f ("" g h) i) j)"#
    );
}

#[test]
fn test_dedent_several_levels() {
    assert_eq!(
        tree("f\n  g\n    h\nj"),
        r#"("\n" ("" f ("" g h)) j)"#
    );
}

#[test]
fn test_dedent_with_trailing_separators() {
    assert_eq!(tree("f\n  g\n    h\n"), r#"("" f ("" g h))"#);
    assert_eq!(
        tree("f\n  g\n    h\n\n\nj"),
        r#"("\n" ("" f ("" g h)) j)"#
    );
    assert_eq!(
        tree("f\n  g\n    h\n  \nj\n\n"),
        r#"("\n" ("" f ("" g h)) j)"#
    );
}

#[test]
fn test_dedent_into_statement_block() {
    assert_eq!(
        tree("a =\n  b\n  c =\n    d\n    e\nf"),
        r#"("\n" ("=" a ("\n" b ("=" c ("\n" d e)))) f)"#
    );
}

#[test]
fn test_leading_blank_lines() {
    assert_eq!(tree("\n\na + b"), r#"("+" a b)"#);
    assert_eq!(tree("\n  a"), "a");
}

#[test]
fn test_empty_input() {
    assert_eq!(tree(""), "None");
    assert_eq!(tree("\n"), "None");
    assert!(parse("x").unwrap().is_closed());
}

#[test]
fn test_unexpected_block_delimiter() {
    let error = parse(")").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedBlockDelimiter {
            token: ")".to_string()
        }
    );
    assert_eq!(error.get_kind(), ErrorKind::Structural);
    assert_eq!(error.get_position().offset, 0);
}

#[test]
fn test_unexpected_eof() {
    let error = parse("(a\n").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnexpectedEof);
    assert_eq!(error.get_kind(), ErrorKind::Structural);
}

#[test]
fn test_unexpected_dedent() {
    let error = parse("a\n  (b\nc)").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnexpectedDedent);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_nested_parentheses_within_limit() {
    let source = format!("{}a{}", "(".repeat(60), ")".repeat(60));

    assert_eq!(tree(&source), "a");
}

#[test]
fn test_too_deeply_nested_parentheses() {
    let source = format!("{}a{}", "(".repeat(150), ")".repeat(150));
    let error = parse(source).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::TooDeeplyNested);
    assert_eq!(error.get_kind(), ErrorKind::Structural);
    // The top-level block is the first open region.
    assert_eq!(error.get_position().offset, MAX_NESTING_DEPTH - 1);
}

#[test]
fn test_too_deeply_nested_blocks() {
    let mut source = String::from("a\n");
    for width in 1..=110 {
        source.push_str(&" ".repeat(width));
        source.push_str("a\n");
    }
    let error = parse(source).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::TooDeeplyNested);
    assert_eq!(error.get_position().line, MAX_NESTING_DEPTH + 1);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_source_name() {
    let error = parse_with_name("(", Some("main.dg".to_string())).unwrap_err();

    assert_eq!(error.get_position().file.as_str(), "main.dg");
    assert_eq!(error.to_string(), "unexpected EOF (main.dg:1:2)");

    let root = parse("a").unwrap();
    assert_eq!(root.get_location().file.as_str(), "<string>");
}
