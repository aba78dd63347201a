use std::fmt;

use crate::interpreter::lexer::token::{Position, Token, TokenKind};

/// A syntax tree node.
///
/// Every node is built around the token it came from, so its kind, text and
/// source position are those of the token. Operator nodes own their operands
/// as children; a block or parenthesized group owns its statements.
///
/// While the tree builder is still folding a statement, bare operators sit in
/// the statement as unresolved leaves. Once a statement is accepted every node
/// in it is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The token this node was built from.
    pub token:    Token,
    /// Whether this node is a complete sub-expression.
    pub resolved: bool,
    /// Operands, arguments or statements, in source order.
    pub children: Vec<Node>,
}

impl Node {
    /// Wraps a token as a leaf.
    ///
    /// Operands are resolved from the start; operators and keywords that still
    /// need operands are not.
    #[must_use]
    pub fn leaf(token: Token) -> Self {
        Self { resolved: token.kind.is_operand(),
               token,
               children: Vec::new() }
    }

    /// Creates a resolved node from a token and its children.
    #[must_use]
    pub const fn operation(token: Token, children: Vec<Self>) -> Self {
        Self { token,
               resolved: true,
               children }
    }

    /// The kind of the underlying token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.token.kind
    }

    /// The text of the underlying token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.token.text
    }

    /// Returns `true` if this node and all of its descendants are resolved.
    #[must_use]
    pub fn fully_resolved(&self) -> bool {
        self.resolved && self.children.iter().all(Self::fully_resolved)
    }

    /// Finds the first unresolved node, depth first.
    #[must_use]
    pub fn first_unresolved(&self) -> Option<&Self> {
        if !self.resolved {
            return Some(self);
        }
        self.children.iter().find_map(Self::first_unresolved)
    }

    /// The position of the leftmost token in this subtree.
    ///
    /// For a folded operator this is its left operand, not the operator.
    #[must_use]
    pub fn start(&self) -> &Position {
        self.children
            .iter()
            .map(Self::start)
            .fold(&self.token.position, |leftmost, position| {
                if (position.line, position.column) < (leftmost.line, leftmost.column) {
                    position
                } else {
                    leftmost
                }
            })
    }

    fn label(&self) -> &str {
        match self.kind() {
            TokenKind::LeftBrace => "block",
            TokenKind::LeftParen => "group",
            TokenKind::Apply => "call",
            TokenKind::Function => "fn",
            _ => self.text(),
        }
    }
}

/// Renders the tree as an S-expression.
///
/// Leaves print as their source text; everything else prints as a
/// parenthesized label followed by its children.
///
/// # Example
/// ```
/// use meh::interpreter::parser::parse;
///
/// let root = parse("demo", "1 + 2 * 3".as_bytes());
///
/// assert_eq!(root.to_string(), "(block (+ 1 (* 2 3)))");
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let is_group = matches!(self.kind(), TokenKind::LeftBrace | TokenKind::LeftParen);
        if self.children.is_empty() && !is_group {
            return write!(f, "{}", self.text());
        }

        write!(f, "({}", self.label())?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
