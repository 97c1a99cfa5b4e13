use std::fmt::{Debug, Display};

use num_bigint::BigInt;

use crate::Location;

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Integer(BigInt),
    Float(f64),
    Imaginary(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::None => write!(f, "None"),
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{:?}", value),
            Literal::Imaginary(value) => write!(f, "{:?}j", value),
            Literal::String(value) => write!(f, "{:?}", value),
            Literal::Bytes(value) => write!(f, "b\"{}\"", value.escape_ascii()),
        }
    }
}

/// Which of the three node shapes a `Node` holds.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum NodeType {
    Constant,
    Link,
    Expression,
}

/// Leaf holding a literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub value: Literal,
    pub indented: bool,
    pub location: Location,
}

impl Constant {
    pub fn new(value: Literal, location: Location) -> Self {
        Constant {
            value,
            indented: false,
            location,
        }
    }
}

/// Leaf holding an identifier or operator symbol.
///
/// `infix` is set for symbol runs, backtick-quoted names and the infix
/// keywords. A link only stops acting as an operator once it is `closed`,
/// which happens when it is the whole content of a parenthesised region.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub name: String,
    pub infix: bool,
    pub closed: bool,
    pub indented: bool,
    pub location: Location,
}

impl Link {
    pub fn new(name: impl Into<String>, infix: bool, location: Location) -> Self {
        Link {
            name: name.into(),
            infix,
            closed: false,
            indented: false,
            location,
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Operator applied to one or more operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub operator: Link,
    pub operands: Vec<Node>,
    pub closed: bool,
    pub indented: bool,
    pub location: Location,
}

impl Expression {
    /// `lhs op rhs`, or the closed postfix form `lhs op` when there is no `rhs`.
    pub fn new(operator: Link, lhs: Node, rhs: Option<Node>) -> Self {
        let closed = rhs.is_none();
        let mut operands = vec![lhs];
        operands.extend(rhs);

        let mut expression = Expression {
            location: operator.location.clone(),
            operator,
            operands,
            closed,
            indented: false,
        };
        expression.update_location();
        expression
    }

    /// Open and not an off-side block: later operators may still reach inside.
    pub fn is_traversable(&self) -> bool {
        !self.closed && !self.indented
    }

    pub fn push(&mut self, operand: Node) {
        debug_assert!(!self.closed, "operand appended to a closed expression");
        self.operands.push(operand);
        self.update_location();
    }

    /// Span runs from the first operand to whichever child ends last.
    pub fn update_location(&mut self) {
        let (Some(first), Some(last)) = (self.operands.first(), self.operands.last()) else {
            return;
        };

        let first = first.get_location();
        let end = last.get_location().end.max(self.operator.location.end);

        self.location = Location {
            start: first.start,
            end,
            file: first.file.clone(),
            first_line: first.first_line.clone(),
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Constant(Constant),
    Link(Link),
    Expression(Expression),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Constant(_) => NodeType::Constant,
            Node::Link(_) => NodeType::Link,
            Node::Expression(_) => NodeType::Expression,
        }
    }

    pub fn get_location(&self) -> &Location {
        match self {
            Node::Constant(constant) => &constant.location,
            Node::Link(link) => &link.location,
            Node::Expression(expression) => &expression.location,
        }
    }

    /// Constants never accept extension, so they always count as closed.
    pub fn is_closed(&self) -> bool {
        match self {
            Node::Constant(_) => true,
            Node::Link(link) => link.closed,
            Node::Expression(expression) => expression.closed,
        }
    }

    pub fn close(&mut self) {
        match self {
            Node::Constant(_) => {}
            Node::Link(link) => link.closed = true,
            Node::Expression(expression) => expression.closed = true,
        }
    }

    pub fn is_indented(&self) -> bool {
        match self {
            Node::Constant(constant) => constant.indented,
            Node::Link(link) => link.indented,
            Node::Expression(expression) => expression.indented,
        }
    }

    pub fn mark_indented(&mut self) {
        match self {
            Node::Constant(constant) => constant.indented = true,
            Node::Link(link) => link.indented = true,
            Node::Expression(expression) => expression.indented = true,
        }
    }

    /// An infix link that can still act as an operator.
    pub fn is_infix(&self) -> bool {
        matches!(self, Node::Link(link) if link.infix)
    }

    /// A statement separator, i.e. a line break link.
    pub fn is_separator(&self) -> bool {
        matches!(self, Node::Link(link) if link.is("\n"))
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Node::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Node::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

/// S-expression form: `("+" 1 ("*" 2 3))`. Operators are printed quoted so
/// that the juxtaposition operator shows up as `""` and the statement
/// separator as `"\n"`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Constant(constant) => write!(f, "{}", constant.value),
            Node::Link(link) => write!(f, "{}", link.name),
            Node::Expression(expression) => {
                write!(f, "({:?}", expression.operator.name)?;
                for operand in &expression.operands {
                    write!(f, " {}", operand)?;
                }
                write!(f, ")")
            }
        }
    }
}
