use std::str::Chars;

use crate::interpreter::lexer::token::TokenKind;

/// Why a string literal could not be unescaped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    /// A backslash followed by a rune with no escape meaning.
    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),
    /// A `\x`, `\u` or `\U` escape without enough hex digits.
    #[error("escape sequence '\\{prefix}' needs {digits} hex digits")]
    ShortHex {
        /// The escape letter.
        prefix: char,
        /// How many digits it takes.
        digits: usize,
    },
    /// A hex escape naming something that is not a valid character.
    #[error("escape sequence '\\{prefix}{hex}' is not a valid character")]
    InvalidCodePoint {
        /// The escape letter.
        prefix: char,
        /// The digits as written.
        hex:    String,
    },
    /// A backslash at the very end of the literal.
    #[error("dangling backslash")]
    Dangling,
}

/// Returns the string a literal token denotes.
///
/// `text` is the token text including its quotes. Backtick strings are raw:
/// only the quotes are removed. Double- and single-quoted strings have their
/// escape sequences replaced.
///
/// # Errors
/// Returns an [`EscapeError`] for an unknown or malformed escape sequence.
///
/// # Example
/// ```
/// use meh::{interpreter::lexer::token::TokenKind, util::escape::literal_value};
///
/// assert_eq!(literal_value(TokenKind::DoubleQuoteString, r#""a\tb""#).unwrap(), "a\tb");
/// assert_eq!(literal_value(TokenKind::BacktickString, r"`a\tb`").unwrap(), r"a\tb");
/// ```
pub fn literal_value(kind: TokenKind, text: &str) -> Result<String, EscapeError> {
    let body = strip_quotes(text);
    if kind == TokenKind::BacktickString {
        Ok(body.to_string())
    } else {
        unescape(body)
    }
}

fn strip_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Replaces backslash escape sequences in `body`.
///
/// Supported: `\n \t \r \\ \" \' \0 \a \b \f \v`, `\xHH` (ASCII only),
/// `\uXXXX` and `\UXXXXXXXX`.
///
/// # Errors
/// Returns an [`EscapeError`] for anything else following a backslash.
pub fn unescape(body: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let escaped = match chars.next().ok_or(EscapeError::Dangling)? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            '0' => '\0',
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0C',
            'v' => '\x0B',
            'x' => {
                let c = hex_escape(&mut chars, 'x', 2)?;
                if !c.is_ascii() {
                    return Err(EscapeError::InvalidCodePoint { prefix: 'x',
                                                               hex:    format!("{:02X}", u32::from(c)), });
                }
                c
            },
            'u' => hex_escape(&mut chars, 'u', 4)?,
            'U' => hex_escape(&mut chars, 'U', 8)?,
            other => return Err(EscapeError::UnknownEscape(other)),
        };
        out.push(escaped);
    }

    Ok(out)
}

fn hex_escape(chars: &mut Chars<'_>, prefix: char, digits: usize) -> Result<char, EscapeError> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.chars().count() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EscapeError::ShortHex { prefix, digits });
    }

    u32::from_str_radix(&hex, 16).ok()
                                 .and_then(char::from_u32)
                                 .ok_or(EscapeError::InvalidCodePoint { prefix, hex })
}
