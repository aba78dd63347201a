use std::io::Read;

use tracing::{debug, trace, warn};

use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::{
            token::{Position, Token, TokenKind},
            tokenize,
        },
        parser::{
            binary::{desugar_compound, fold_assignments, fold_binary, fold_commas},
            block::{fold_calls, unwrap_groups},
            statement::Statements,
            unary::{fold_prefix, fold_return},
        },
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Infix precedence tiers folded left to right, highest first.
const BINARY_TIERS: [&[TokenKind]; 5] =
    [&[TokenKind::Mult, TokenKind::Div, TokenKind::Modulo],
     &[TokenKind::Plus, TokenKind::Minus],
     &[TokenKind::Less,
       TokenKind::Greater,
       TokenKind::LessOrEqual,
       TokenKind::GreaterOrEqual,
       TokenKind::Equal,
       TokenKind::NotEqual],
     &[TokenKind::And, TokenKind::Or],
     &[TokenKind::Pipe]];

/// Parses a character stream into a root block node.
///
/// Statements that fail to reduce are logged and left out of the tree; see
/// [`parse_with_diagnostics`] to get them back.
///
/// # Example
/// ```
/// use meh::interpreter::parser::parse;
///
/// let root = parse("demo", "a = b = 1".as_bytes());
///
/// assert_eq!(root.children.len(), 1);
/// assert_eq!(root.children[0].to_string(), "(= a (= b 1))");
/// ```
pub fn parse(source_name: &str, reader: impl Read) -> Node {
    parse_with_diagnostics(source_name, reader).0
}

/// Parses a character stream, returning the root block node and every syntax
/// diagnostic raised on the way.
///
/// The root is a brace group positioned at line 1, column 1 whose children are
/// the top-level statements that reduced cleanly.
///
/// # Example
/// ```
/// use meh::interpreter::parser::parse_with_diagnostics;
///
/// let (root, errors) = parse_with_diagnostics("demo", "* 2\nx = 2".as_bytes());
///
/// assert_eq!(root.to_string(), "(block (= x 2))");
/// assert_eq!(errors.len(), 1);
/// ```
pub fn parse_with_diagnostics(source_name: &str, reader: impl Read) -> (Node, Vec<SyntaxError>) {
    let mut tokens = tokenize(source_name, reader).into_iter();
    let mut statements = Vec::new();
    let mut diagnostics = Vec::new();

    for statement in Statements::new(&mut tokens).map(|batch| batch.and_then(resolve_statement)) {
        match statement {
            Ok(node) => statements.push(node),
            Err(error) => {
                warn!("{error}");
                diagnostics.push(error);
            },
        }
    }

    let position = Position { source: source_name.into(),
                              line:   1,
                              column: 1, };
    let root = Node::operation(Token::new(TokenKind::LeftBrace, "{", position), statements);

    debug!(statements = root.children.len(),
           diagnostics = diagnostics.len(),
           "parsed {source_name}");

    (root, diagnostics)
}

/// Reduces the nodes of one statement to a single resolved node.
///
/// The passes run in a fixed order, each one folding operators of its tier
/// until none is left:
///
/// 1. function literals and applications
/// 2. parenthesized groups holding one statement
/// 3. prefix `!` and `-`
/// 4. `* / %`, then `+ -`, then comparisons, then `&& ||`, then `>>`
/// 5. comma lists
/// 6. assignment, right to left
/// 7. a leading `return`
///
/// Compound assignments are then rewritten to plain ones.
///
/// # Errors
/// Returns a [`SyntaxError`] if anything other than one fully resolved node is
/// left.
pub fn resolve_statement(mut nodes: Vec<Node>) -> ParseResult<Node> {
    fold_calls(&mut nodes);
    unwrap_groups(&mut nodes);
    fold_prefix(&mut nodes);
    for tier in BINARY_TIERS {
        fold_binary(&mut nodes, tier);
    }
    fold_commas(&mut nodes);
    fold_assignments(&mut nodes);
    fold_return(&mut nodes);

    let node = validate(nodes)?;
    let node = desugar_compound(node);
    trace!(statement = %node, "reduced statement");
    Ok(node)
}

fn validate(mut nodes: Vec<Node>) -> ParseResult<Node> {
    if let Some(unresolved) = nodes.iter().find_map(Node::first_unresolved) {
        return Err(SyntaxError::MisplacedOperator { operator: unresolved.text().to_string(),
                                                    position: unresolved.token.position.clone(), });
    }

    match nodes.len() {
        1 => Ok(nodes.remove(0)),
        count => {
            let position = nodes[0].start().clone();
            Err(SyntaxError::UnresolvedStatement { count, position })
        },
    }
}
