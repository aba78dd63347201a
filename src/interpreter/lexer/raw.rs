use logos::{Lexer, Logos};

use crate::{error::LexError, interpreter::lexer::token::TokenKind};

/// Raw lexemes recognized by the scanner.
///
/// Spaces and tabs are skipped here; line breaks are kept as [`Newline`] so the
/// tokenizer can decide whether they end a statement. Strings, comments and
/// numbers finish in hand-written callbacks that walk the remaining input one
/// rune at a time.
///
/// [`Newline`]: Lexeme::Newline
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t]+")]
pub enum Lexeme {
    /// `\n`, `\r\n`, `\r`, vertical tab or form feed.
    #[regex(r"\r\n|[\n\r\x0B\x0C]")]
    Newline,
    /// Identifiers. Keywords below take priority on an exact match.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,
    /// `fn`
    #[token("fn")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// Digits with at most one decimal point.
    #[regex(r"[0-9]+(\.[0-9]*)?", reject_glued_number)]
    Number,
    /// `"..."`
    #[token("\"", |lex| scan_string(lex, '"', true, false))]
    DoubleQuoteString,
    /// `'...'`
    #[token("'", |lex| scan_string(lex, '\'', true, false))]
    SingleQuoteString,
    /// `` `...` ``
    #[token("`", |lex| scan_string(lex, '`', false, true))]
    BacktickString,
    /// `# ...`
    #[token("#", skip_to_line_end)]
    HashComment,
    /// `// ...`
    #[token("//", skip_to_line_end)]
    SlashComment,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `!`
    #[token("!")]
    Not,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mult,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Modulo,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=` and its `:=` spelling.
    #[token("=")]
    #[token(":=")]
    Assign,
    /// `>>`
    #[token(">>")]
    Pipe,
    /// `>=`
    #[token(">=")]
    GreaterOrEqual,
    /// `<=`
    #[token("<=")]
    LessOrEqual,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `==`
    #[token("==")]
    Equal,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MultAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModuloAssign,
    /// `||`
    #[token("||")]
    Or,
    /// `&&`
    #[token("&&")]
    And,
}

impl Lexeme {
    /// The token kind this lexeme is emitted as.
    ///
    /// A [`Lexeme::Newline`] maps to [`TokenKind::Separator`]; whether it is
    /// actually emitted is up to the tokenizer.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Newline | Self::Semicolon => TokenKind::Separator,
            Self::Ident => TokenKind::Ident,
            Self::Function => TokenKind::Function,
            Self::Return => TokenKind::Return,
            Self::Break => TokenKind::Break,
            Self::Continue => TokenKind::Continue,
            Self::Number => TokenKind::Number,
            Self::DoubleQuoteString => TokenKind::DoubleQuoteString,
            Self::SingleQuoteString => TokenKind::SingleQuoteString,
            Self::BacktickString => TokenKind::BacktickString,
            Self::HashComment => TokenKind::HashComment,
            Self::SlashComment => TokenKind::SlashComment,
            Self::Comma => TokenKind::Comma,
            Self::LeftBrace => TokenKind::LeftBrace,
            Self::RightBrace => TokenKind::RightBrace,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::Not => TokenKind::Not,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mult => TokenKind::Mult,
            Self::Div => TokenKind::Div,
            Self::Modulo => TokenKind::Modulo,
            Self::Less => TokenKind::Less,
            Self::Greater => TokenKind::Greater,
            Self::Assign => TokenKind::Assign,
            Self::Pipe => TokenKind::Pipe,
            Self::GreaterOrEqual => TokenKind::GreaterOrEqual,
            Self::LessOrEqual => TokenKind::LessOrEqual,
            Self::NotEqual => TokenKind::NotEqual,
            Self::Equal => TokenKind::Equal,
            Self::PlusAssign => TokenKind::PlusAssign,
            Self::MinusAssign => TokenKind::MinusAssign,
            Self::MultAssign => TokenKind::MultAssign,
            Self::DivAssign => TokenKind::DivAssign,
            Self::ModuloAssign => TokenKind::ModuloAssign,
            Self::Or => TokenKind::Or,
            Self::And => TokenKind::And,
        }
    }
}

const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0B' | '\x0C')
}

/// Fails when a number runs straight into a letter, `_` or a second point.
///
/// The offending rune is consumed so the error token covers it.
fn reject_glued_number(lex: &mut Lexer<'_, Lexeme>) -> Result<(), LexError> {
    match lex.remainder().chars().next() {
        Some(c) if c == '.' || c == '_' || c.is_alphanumeric() => {
            lex.bump(c.len_utf8());
            Err(LexError::MalformedNumber)
        },
        _ => Ok(()),
    }
}

/// Consumes a quoted string after its opening quote.
///
/// With `escapes`, a backslash swallows the following rune whatever it is.
/// Without `multiline`, a line break before the closing quote is an error.
fn scan_string(lex: &mut Lexer<'_, Lexeme>,
               quote: char,
               escapes: bool,
               multiline: bool)
               -> Result<(), LexError> {
    let mut chars = lex.remainder().char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == quote {
            lex.bump(offset + c.len_utf8());
            return Ok(());
        }

        if escapes && c == '\\' {
            if chars.next().is_none() {
                break;
            }
            continue;
        }

        if !multiline && is_line_break(c) {
            lex.bump(offset);
            return Err(LexError::UnterminatedString { quote });
        }
    }

    lex.bump(lex.remainder().len());
    Err(LexError::UnterminatedString { quote })
}

/// Consumes a line comment up to, but not including, the line break.
fn skip_to_line_end(lex: &mut Lexer<'_, Lexeme>) {
    let length = lex.remainder()
                    .find(is_line_break)
                    .unwrap_or_else(|| lex.remainder().len());
    lex.bump(length);
}
