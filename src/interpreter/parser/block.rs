use crate::{ast::Node, interpreter::lexer::token::TokenKind};

/// Folds function literals and applications, leftmost first.
///
/// `fn` followed by a parenthesized group and a brace group becomes a resolved
/// `fn` node with the two groups as children. A callee followed directly by a
/// parenthesized group becomes an application node holding the callee and the
/// argument group. Rescanning from the left after each fold makes `f(1)(2)`
/// apply the result of `f(1)` to `2`.
///
/// # Parameters
/// - `nodes`: The statement being reduced.
pub fn fold_calls(nodes: &mut Vec<Node>) {
    loop {
        let Some(index) = (0..nodes.len()).find(|&i| is_literal_at(nodes, i) || is_call_at(nodes, i))
        else {
            return;
        };

        if is_literal_at(nodes, index) {
            let body = nodes.remove(index + 2);
            let params = nodes.remove(index + 1);
            let keyword = nodes.remove(index);
            nodes.insert(index, Node::operation(keyword.token, vec![params, body]));
        } else {
            let args = nodes.remove(index + 1);
            let callee = nodes.remove(index);
            let token = args.token.rekind(TokenKind::Apply, "(");
            nodes.insert(index, Node::operation(token, vec![callee, args]));
        }
    }
}

/// Replaces parenthesized groups holding exactly one statement with that
/// statement.
///
/// Groups that are still around at this point are plain grouping, so
/// `(x + 1)` carries no more structure than the sum itself. A parenthesized
/// comma list keeps its group so it stays one value inside an enclosing list:
/// `f((1, 2))` passes a single tuple.
pub fn unwrap_groups(nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        let single = match node.children.as_slice() {
            [only] => only.kind() != TokenKind::Comma,
            _ => false,
        };
        if node.kind() == TokenKind::LeftParen && single {
            if let Some(inner) = node.children.pop() {
                *node = inner;
            }
        }
    }
}

fn is_group(node: Option<&Node>, kind: TokenKind) -> bool {
    node.is_some_and(|n| n.kind() == kind && n.resolved)
}

fn is_literal_at(nodes: &[Node], index: usize) -> bool {
    let keyword = &nodes[index];
    keyword.kind() == TokenKind::Function
    && !keyword.resolved
    && is_group(nodes.get(index + 1), TokenKind::LeftParen)
    && is_group(nodes.get(index + 2), TokenKind::LeftBrace)
}

fn is_call_at(nodes: &[Node], index: usize) -> bool {
    let callee = &nodes[index];
    let callable = callee.resolved
                   && matches!(callee.kind(),
                               TokenKind::Ident
                               | TokenKind::Apply
                               | TokenKind::Function
                               | TokenKind::LeftParen);
    callable && is_group(nodes.get(index + 1), TokenKind::LeftParen)
}
