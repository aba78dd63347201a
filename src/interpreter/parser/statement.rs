use std::collections::VecDeque;

use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::core::{ParseResult, resolve_statement},
    },
};

/// Splits a token stream into statement batches.
///
/// Each item is either the raw, not yet reduced nodes of one statement or a
/// diagnostic. Braces and parentheses are handled here: an opening delimiter
/// starts a nested `Statements` over the same stream, whose statements are
/// reduced and gathered into one resolved group node. The nested iterator
/// stops at its matching closer, so the outer one never sees the tokens
/// inside the group.
///
/// A block can share a line with its neighbors: `x = 1 { x = 2 } x` is three
/// statements. A block directly after an operand starts a new statement, and
/// so does an operand or keyword directly after a block.
///
/// Comments are dropped. A lexical error token ends the stream after being
/// reported.
pub struct Statements<'a> {
    tokens:   &'a mut dyn Iterator<Item = Token>,
    open:     Option<Token>,
    leftover: Option<Token>,
    pending:  VecDeque<SyntaxError>,
    finished: bool,
}

impl<'a> Statements<'a> {
    /// Creates the top-level splitter, which runs until end of input.
    pub fn new(tokens: &'a mut dyn Iterator<Item = Token>) -> Self {
        Self { tokens,
               open: None,
               leftover: None,
               pending: VecDeque::new(),
               finished: false }
    }

    fn nested(tokens: &'a mut dyn Iterator<Item = Token>, open: Token) -> Self {
        Self { tokens,
               open: Some(open),
               leftover: None,
               pending: VecDeque::new(),
               finished: false }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.leftover.take().or_else(|| self.tokens.next())
    }

    /// Closes this splitter at end of input, reporting a still open group.
    fn finish(&mut self) {
        self.finished = true;
        if let Some(open) = &self.open {
            self.pending
                .push_back(SyntaxError::UnclosedDelimiter { delimiter: open.text.clone(),
                                                            position:  open.position.clone(), });
        }
    }

    /// Handles a closing delimiter. Returns `true` if it ends this group.
    fn close(&mut self, closer: Token) -> bool {
        match self.open.as_ref().map(|open| open.kind) {
            Some(open) if closes(open, closer.kind) => {
                self.finished = true;
                true
            },
            Some(_) => {
                // Leave the closer for an enclosing group that may match it.
                self.finish();
                self.leftover = Some(closer);
                true
            },
            None => {
                self.pending
                    .push_back(SyntaxError::UnmatchedDelimiter { delimiter: closer.text,
                                                                 position:  closer.position, });
                false
            },
        }
    }

    /// Builds the group node for a region opened by `open`.
    fn group(&mut self, open: Token) -> Node {
        let mut inner = Statements::nested(&mut *self.tokens, open.clone());
        let mut children = Vec::new();

        for statement in inner.by_ref() {
            match statement.and_then(resolve_statement) {
                Ok(node) => children.push(node),
                Err(error) => self.pending.push_back(error),
            }
        }

        self.leftover = inner.leftover.take();
        Node::operation(open, children)
    }
}

impl Iterator for Statements<'_> {
    type Item = ParseResult<Vec<Node>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = self.pending.pop_front() {
            return Some(Err(error));
        }

        let mut batch = Vec::new();

        while !self.finished {
            let Some(token) = self.next_token() else {
                self.finish();
                break;
            };

            if batch.last().is_some_and(|last| begins_next_statement(last, token.kind)) {
                self.leftover = Some(token);
                return Some(Ok(batch));
            }

            match token.kind {
                TokenKind::Separator if batch.is_empty() => {},
                TokenKind::Separator => return Some(Ok(batch)),
                TokenKind::Eof => self.finish(),
                TokenKind::Error => {
                    self.pending
                        .push_back(SyntaxError::Lexical { message:  token.text,
                                                          position: token.position, });
                    self.finish();
                },
                TokenKind::RightBrace | TokenKind::RightParen => {
                    if self.close(token) {
                        break;
                    }
                },
                TokenKind::LeftBrace | TokenKind::LeftParen => {
                    let group = self.group(token);
                    batch.push(group);
                },
                kind if kind.is_comment() => {},
                _ => batch.push(Node::leaf(token)),
            }
        }

        if !batch.is_empty() {
            return Some(Ok(batch));
        }

        self.pending.pop_front().map(Err)
    }
}

/// Returns `true` when a token of kind `next` cannot continue a statement
/// that currently ends with `last`.
fn begins_next_statement(last: &Node, next: TokenKind) -> bool {
    match last.kind() {
        TokenKind::LeftBrace => {
            next.is_operand()
            || matches!(next,
                        TokenKind::LeftBrace
                        | TokenKind::Function
                        | TokenKind::Return
                        | TokenKind::Not)
        },
        kind => kind.is_operand() && last.children.is_empty() && next == TokenKind::LeftBrace,
    }
}

const fn closes(open: TokenKind, close: TokenKind) -> bool {
    matches!((open, close),
             (TokenKind::LeftBrace, TokenKind::RightBrace)
             | (TokenKind::LeftParen, TokenKind::RightParen))
}
