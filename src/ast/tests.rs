use std::rc::Rc;

use num_bigint::BigInt;
use pretty_assertions::assert_eq;

use super::ast::{Constant, Expression, Link, Literal, Node, NodeType};
use crate::Location;

fn loc(start: usize, end: usize) -> Location {
    Location {
        start,
        end,
        file: Rc::new("test.dg".to_string()),
        first_line: Rc::from("a + bc"),
    }
}

fn name(name: &str, start: usize) -> Node {
    Node::Link(Link::new(name, false, loc(start, start + name.len())))
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::None.to_string(), "None");
    assert_eq!(Literal::Integer(BigInt::from(-3)).to_string(), "-3");
    assert_eq!(Literal::Float(1000.0).to_string(), "1000.0");
    assert_eq!(Literal::Imaginary(2.5).to_string(), "2.5j");
    assert_eq!(Literal::String("a\"b".to_string()).to_string(), r#""a\"b""#);
    assert_eq!(Literal::Bytes(vec![b'h', b'i', 0xff]).to_string(), r#"b"hi\xff""#);
}

#[test]
fn test_expression_new() {
    let plus = Link::new("+", true, loc(2, 3));
    let expression = Expression::new(plus, name("a", 0), Some(name("bc", 4)));

    assert!(!expression.closed);
    assert!(expression.is_traversable());
    assert_eq!(expression.operands.len(), 2);
    assert_eq!(expression.location.start, 0);
    assert_eq!(expression.location.end, 6);
}

#[test]
fn test_expression_without_rhs_is_closed() {
    let bang = Link::new("!", true, loc(2, 3));
    let expression = Expression::new(bang, name("a", 0), None);

    assert!(expression.closed);
    assert!(!expression.is_traversable());
    assert_eq!(expression.operands.len(), 1);
    // The operator is the last thing in the span.
    assert_eq!(expression.location.end, 3);
}

#[test]
fn test_expression_push() {
    let comma = Link::new(",", true, loc(1, 2));
    let mut expression = Expression::new(comma, name("a", 0), Some(name("b", 3)));
    expression.push(name("c", 6));

    assert_eq!(expression.operands.len(), 3);
    assert_eq!(expression.location.start, 0);
    assert_eq!(expression.location.end, 7);
    assert_eq!(Node::Expression(expression).to_string(), r#"("," a b c)"#);
}

#[test]
fn test_indented_expression_is_not_traversable() {
    let newline = Link::new("\n", true, loc(1, 2));
    let mut node = Node::Expression(Expression::new(newline, name("a", 0), Some(name("b", 2))));
    node.mark_indented();

    assert!(node.is_indented());
    assert!(!node.is_closed());
    assert!(!node.as_expression().unwrap().is_traversable());
}

#[test]
fn test_node_flags() {
    let constant = Node::Constant(Constant::new(Literal::Integer(BigInt::from(1)), loc(0, 1)));
    assert_eq!(constant.get_node_type(), NodeType::Constant);
    assert!(constant.is_closed());

    let mut plus = Node::Link(Link::new("+", true, loc(0, 1)));
    assert_eq!(plus.get_node_type(), NodeType::Link);
    assert!(plus.is_infix());
    assert!(!plus.is_closed());
    plus.close();
    assert!(plus.is_closed());
    assert!(plus.as_link().unwrap().is("+"));

    let separator = Node::Link(Link::new("\n", true, loc(1, 2)));
    assert!(separator.is_separator());
    assert!(!name("x", 0).is_infix());
}

#[test]
fn test_node_display() {
    let times = Link::new("*", true, loc(6, 7));
    let product = Expression::new(
        times,
        Node::Constant(Constant::new(Literal::Integer(BigInt::from(2)), loc(4, 5))),
        Some(Node::Constant(Constant::new(Literal::Integer(BigInt::from(3)), loc(8, 9)))),
    );
    let plus = Link::new("+", true, loc(2, 3));
    let sum = Expression::new(
        plus,
        Node::Constant(Constant::new(Literal::Integer(BigInt::from(1)), loc(0, 1))),
        Some(Node::Expression(product)),
    );

    assert_eq!(Node::Expression(sum).to_string(), r#"("+" 1 ("*" 2 3))"#);

    let call = Expression::new(Link::new("", true, loc(1, 1)), name("f", 0), Some(name("x", 2)));
    assert_eq!(Node::Expression(call).to_string(), r#"("" f x)"#);
}

#[test]
fn test_location_after() {
    let location = loc(3, 7).after();

    assert_eq!(location.start, 7);
    assert_eq!(location.end, 7);
    assert_eq!(location.file.as_str(), "test.dg");
}
