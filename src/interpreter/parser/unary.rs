use crate::{ast::Node, interpreter::lexer::token::TokenKind};

/// Folds prefix `!` and `-`, rightmost first.
///
/// An operator counts as prefix when it starts the statement or follows
/// another unresolved operator, and its right neighbour is resolved. Working
/// from the right lets `!-x` and `- -x` nest naturally.
///
/// # Parameters
/// - `nodes`: The statement being reduced.
pub fn fold_prefix(nodes: &mut Vec<Node>) {
    while let Some(index) = (0..nodes.len()).rev().find(|&i| is_prefix_at(nodes, i)) {
        let operand = nodes.remove(index + 1);
        let operator = nodes.remove(index);
        nodes.insert(index, Node::operation(operator.token, vec![operand]));
    }
}

/// Resolves a `return` that starts the statement.
///
/// A resolved right neighbour becomes the returned expression; a bare
/// `return` returns nothing.
pub fn fold_return(nodes: &mut Vec<Node>) {
    let starts_with_return = nodes.first()
                                  .is_some_and(|n| n.kind() == TokenKind::Return && !n.resolved);
    if !starts_with_return {
        return;
    }

    if nodes.len() == 1 {
        nodes[0].resolved = true;
    } else if nodes[1].resolved {
        let operand = nodes.remove(1);
        let keyword = nodes.remove(0);
        nodes.insert(0, Node::operation(keyword.token, vec![operand]));
    }
}

fn is_prefix_at(nodes: &[Node], index: usize) -> bool {
    let node = &nodes[index];
    let operator = !node.resolved
                   && node.children.is_empty()
                   && matches!(node.kind(), TokenKind::Not | TokenKind::Minus);
    let leading = index == 0 || !nodes[index - 1].resolved;
    let operand = nodes.get(index + 1).is_some_and(|n| n.resolved);
    operator && leading && operand
}
