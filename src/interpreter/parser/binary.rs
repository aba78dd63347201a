use crate::{ast::Node, interpreter::lexer::token::TokenKind};

const ASSIGNMENTS: [TokenKind; 6] = [TokenKind::Assign,
                                     TokenKind::PlusAssign,
                                     TokenKind::MinusAssign,
                                     TokenKind::MultAssign,
                                     TokenKind::DivAssign,
                                     TokenKind::ModuloAssign];

/// Folds one left-associative precedence tier.
///
/// Repeatedly takes the leftmost unresolved operator of the tier whose
/// neighbours are both resolved and replaces the three nodes with one resolved
/// node, then rescans from the start. `a - b - c` therefore becomes
/// `(- (- a b) c)`.
///
/// # Parameters
/// - `nodes`: The statement being reduced.
/// - `tier`: Operator kinds that share a precedence level.
pub fn fold_binary(nodes: &mut Vec<Node>, tier: &[TokenKind]) {
    while let Some(index) = (1..nodes.len()).find(|&i| is_infix_at(nodes, i, tier)) {
        fold_infix(nodes, index);
    }
}

/// Folds comma lists into flat comma nodes.
///
/// `a, b, c` becomes a single comma node with three children. A comma list
/// that was parenthesized keeps its own node, so `(a, b), c` has two children.
pub fn fold_commas(nodes: &mut Vec<Node>) {
    let tier = [TokenKind::Comma];

    while let Some(start) = (1..nodes.len()).find(|&i| is_infix_at(nodes, i, &tier)) {
        let mut end = start + 1;
        while is_infix_at(nodes, end + 1, &tier) {
            end += 2;
        }

        let mut run = nodes.drain(start - 1..=end);
        let mut items = Vec::new();
        let mut comma = None;
        while let Some(item) = run.next() {
            items.push(item);
            if let Some(separator) = run.next() {
                comma.get_or_insert(separator.token);
            }
        }
        drop(run);

        if let Some(token) = comma {
            nodes.insert(start - 1, Node::operation(token, items));
        }
    }
}

/// Folds plain and compound assignments, rightmost first.
///
/// Taking the rightmost eligible operator makes assignment right-associative:
/// `a = b = 1` becomes `(= a (= b 1))`.
pub fn fold_assignments(nodes: &mut Vec<Node>) {
    while let Some(index) = (1..nodes.len()).rev().find(|&i| is_infix_at(nodes, i, &ASSIGNMENTS)) {
        fold_infix(nodes, index);
    }
}

/// Rewrites every compound assignment in the tree into a plain one.
///
/// `x += y` becomes `x = (x + y)`. Both new nodes keep the source position of
/// the compound operator.
///
/// # Example
/// ```
/// use meh::interpreter::parser::parse;
///
/// let compound = parse("demo", "x += 1".as_bytes());
/// let plain = parse("demo", "x = (x + 1)".as_bytes());
///
/// assert_eq!(compound.to_string(), plain.to_string());
/// ```
#[must_use]
pub fn desugar_compound(mut node: Node) -> Node {
    node.children = node.children.into_iter().map(desugar_compound).collect();

    let Some(operator) = node.kind().compound_operator() else {
        return node;
    };
    if node.children.len() != 2 {
        return node;
    }

    let operator_text = node.text().trim_end_matches('=').to_string();
    let value = node.children.pop();
    let target = node.children.pop();
    match (target, value) {
        (Some(target), Some(value)) => {
            let sum = Node::operation(node.token.rekind(operator, &operator_text),
                                      vec![target.clone(), value]);
            Node::operation(node.token.rekind(TokenKind::Assign, "="), vec![target, sum])
        },
        _ => node,
    }
}

fn is_infix_at(nodes: &[Node], index: usize, tier: &[TokenKind]) -> bool {
    let Some(node) = nodes.get(index) else {
        return false;
    };
    let operator = !node.resolved && node.children.is_empty() && tier.contains(&node.kind());
    let left = index > 0 && nodes[index - 1].resolved;
    let right = nodes.get(index + 1).is_some_and(|n| n.resolved);
    operator && left && right
}

fn fold_infix(nodes: &mut Vec<Node>, index: usize) {
    let right = nodes.remove(index + 1);
    let operator = nodes.remove(index);
    let left = nodes.remove(index - 1);
    nodes.insert(index - 1, Node::operation(operator.token, vec![left, right]));
}
