/// Failures while scanning source text.
///
/// This is the error type of the raw scanner. The tokenizer turns the first
/// one it meets into a single [`TokenKind::Error`] token and stops.
///
/// [`TokenKind::Error`]: crate::interpreter::lexer::token::TokenKind::Error
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A rune that starts no token.
    #[default]
    #[error("unrecognized rune")]
    UnrecognizedRune,
    /// End of line or input before the closing quote.
    #[error("unclosed {} string", quote_name(*quote))]
    UnterminatedString {
        /// The opening quote rune.
        quote: char,
    },
    /// A second decimal point or a letter glued to a number.
    #[error("malformed number")]
    MalformedNumber,
    /// The character stream itself failed.
    #[error("failed to scan next rune: {0}")]
    ReadFailed(String),
}

fn quote_name(quote: char) -> &'static str {
    match quote {
        '"' => "double quote",
        '\'' => "single quote",
        _ => "backtick",
    }
}
