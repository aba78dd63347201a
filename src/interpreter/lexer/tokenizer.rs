use std::{io::Read, sync::Arc};

use logos::{Lexer, Logos};

use crate::{
    error::LexError,
    interpreter::lexer::{
        raw::Lexeme,
        token::{Position, Token, TokenKind},
    },
};

/// Columns advance to the next multiple of this after a tab.
pub const TAB_WIDTH: usize = 4;

/// Lazily turns source text into [`Token`]s.
///
/// The tokenizer tracks line and column, promotes line breaks to statement
/// separators when the last significant token can end a statement, and stops
/// after emitting either one [`TokenKind::Eof`] or one [`TokenKind::Error`].
///
/// # Example
/// ```
/// use meh::interpreter::lexer::{token::TokenKind, tokenizer::Tokenizer};
///
/// let kinds: Vec<_> = Tokenizer::new("demo", "x\n").map(|t| t.kind).collect();
///
/// assert_eq!(kinds, [TokenKind::Ident, TokenKind::Separator, TokenKind::Eof]);
/// ```
pub struct Tokenizer<'src> {
    source:           &'src str,
    name:             Arc<str>,
    lexer:            Lexer<'src, Lexeme>,
    cursor:           usize,
    line:             usize,
    column:           usize,
    last_significant: Option<TokenKind>,
    finished:         bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source`, reporting positions under `name`.
    pub fn new(name: impl Into<Arc<str>>, source: &'src str) -> Self {
        Self { source,
               name: name.into(),
               lexer: Lexeme::lexer(source),
               cursor: 0,
               line: 1,
               column: 1,
               last_significant: None,
               finished: false }
    }

    /// The position of the next unread rune.
    fn current_position(&self) -> Position {
        Position { source: Arc::clone(&self.name),
                   line:   self.line,
                   column: self.column, }
    }

    /// Accounts for every rune between the cursor and `offset`.
    fn advance_to(&mut self, offset: usize) {
        let mut chars = self.source[self.cursor..offset].chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\t' => self.column = next_tab_stop(self.column),
                '\r' if chars.peek() == Some(&'\n') => {},
                '\n' | '\r' | '\x0B' | '\x0C' => {
                    self.line += 1;
                    self.column = 1;
                },
                _ => self.column += 1,
            }
        }

        self.cursor = offset;
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.finished {
                return None;
            }

            let Some(lexeme) = self.lexer.next() else {
                self.finished = true;
                self.advance_to(self.source.len());
                return Some(Token::new(TokenKind::Eof, "", self.current_position()));
            };

            let span = self.lexer.span();
            let text = self.lexer.slice();
            self.advance_to(span.start);
            let position = self.current_position();
            self.advance_to(span.end);

            match lexeme {
                Err(error) => {
                    self.finished = true;
                    return Some(Token::new(TokenKind::Error, error.to_string(), position));
                },
                Ok(Lexeme::Newline) => {
                    if self.last_significant.is_some_and(TokenKind::ends_statement) {
                        self.last_significant = Some(TokenKind::Separator);
                        return Some(Token::new(TokenKind::Separator, text, position));
                    }
                },
                Ok(lexeme) => {
                    let kind = lexeme.kind();
                    if !kind.is_comment() {
                        self.last_significant = Some(kind);
                    }
                    return Some(Token::new(kind, text, position));
                },
            }
        }
    }
}

const fn next_tab_stop(column: usize) -> usize {
    ((column - 1) / TAB_WIDTH + 1) * TAB_WIDTH + 1
}

/// Reads a whole character stream into memory.
pub(crate) fn read_source(mut reader: impl Read) -> Result<String, LexError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)
          .map_err(|e| LexError::ReadFailed(e.to_string()))?;
    Ok(source)
}

/// Tokenizes a whole character stream.
///
/// The result always ends with exactly one [`TokenKind::Eof`], unless scanning
/// failed, in which case the last token is the [`TokenKind::Error`] describing
/// the failure. Comment tokens are included; the tree builder drops them.
///
/// # Example
/// ```
/// use meh::interpreter::lexer::{token::TokenKind, tokenize};
///
/// let tokens = tokenize("demo", "a;\nb".as_bytes());
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Ident, TokenKind::Separator, TokenKind::Ident, TokenKind::Eof]);
/// ```
pub fn tokenize(source_name: &str, reader: impl Read) -> Vec<Token> {
    match read_source(reader) {
        Ok(source) => Tokenizer::new(source_name, &source).collect(),
        Err(error) => {
            let position = Position { source: source_name.into(),
                                      line:   1,
                                      column: 1, };
            vec![Token::new(TokenKind::Error, error.to_string(), position)]
        },
    }
}
