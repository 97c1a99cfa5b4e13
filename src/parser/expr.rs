//! Expression builder: folds one more operator/operand pair into the tree
//! being built for a region.
//!
//! Lowercase letters below stand for arbitrary nodes, `R` and `Q` for infix
//! links.

use crate::{
    ast::ast::{Expression, Link, Node},
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::Token},
};

use super::lookups::{has_priority, is_flattened, is_unary};

/// Combines `lhs` and `op` with the next item `rhs`, pulling more items from
/// the lexer (and pushing them back) when the shape of the input calls for it.
pub fn parse_infix(lexer: &mut Lexer, lhs: Node, op: Link, rhs: Token) -> Result<Node, Error> {
    let mut rhs = rhs;
    let mut separator: Option<Link> = None;

    while !is_unary(&op.name) && rhs.is_separator() {
        let next = lexer.next_token()?;
        if let Token::Node(Node::Link(link)) = std::mem::replace(&mut rhs, next) {
            separator.get_or_insert(link);
        }
    }

    let rhs = match rhs {
        Token::Node(node) if !is_unary(&op.name) => node,
        // `(a R)`: the closing marker (or whatever follows a unary operator)
        // belongs to the caller.
        rhs => {
            lexer.push_front(rhs);
            return finish_without_rhs(lhs, op);
        }
    };

    if let Some(separator) = separator {
        if op.is("") && rhs.is_indented() {
            // `a` followed by an indented block: every line of the block is
            // one more argument.
            let arguments = match rhs {
                Node::Expression(block) if block.operator.is("\n") => block.operands,
                rhs => vec![rhs],
            };
            return Ok(arguments
                .into_iter()
                .fold(lhs, |lhs, argument| insert_rhs(lhs, op.clone(), Some(argument))));
        }

        if !op.is("\n") && !rhs.is_indented() {
            // `a R` with nothing after `R` on its line and no block below:
            // the statement ends at the line break.
            let lhs = finish_without_rhs(lhs, op)?;
            return parse_infix(lexer, lhs, separator, Token::Node(rhs));
        }
    }

    match rhs {
        Node::Link(candidate)
            if !candidate.closed
                && candidate.infix
                && (op.is("") || has_priority(&op.name, &candidate.name)) =>
        {
            // `a R Q b` is `(a R) Q b`.
            let lhs = finish_without_rhs(lhs, op)?;
            let next = lexer.next_token()?;
            parse_infix(lexer, lhs, candidate, next)
        }
        rhs => Ok(insert_rhs(lhs, op, Some(rhs))),
    }
}

/// `lhs R` with no right operand. Juxtaposition and line breaks have no
/// one-operand form, so they leave `lhs` as it is.
fn finish_without_rhs(lhs: Node, op: Link) -> Result<Node, Error> {
    if op.is("") || op.is("\n") {
        return Ok(lhs);
    }

    Ok(insert_rhs(lhs, op, None))
}

/// Applies `op rhs` to `root`, descending along its right edge while `op`
/// binds tighter than the operator found there.
pub fn insert_rhs(root: Node, op: Link, rhs: Option<Node>) -> Node {
    let root = match root {
        Node::Expression(mut expression) if expression.is_traversable() => {
            if has_priority(&op.name, &expression.operator.name) {
                // `a R b Q c` is `a R (b Q c)`.
                if let Some(last) = expression.operands.pop() {
                    expression.operands.push(insert_rhs(last, op, rhs));
                    expression.update_location();
                    return Node::Expression(expression);
                }
            } else if op.name == expression.operator.name && is_flattened(&op.name) {
                if let Some(rhs) = rhs {
                    // `a R b R c` is `R(a, b, c)`.
                    expression.push(rhs);
                    return Node::Expression(expression);
                }
            }

            Node::Expression(expression)
        }
        root => root,
    };

    Node::Expression(Expression::new(op, root, rhs))
}
