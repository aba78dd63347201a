/// Logos-driven scanner producing raw lexemes.
///
/// This module holds the regular part of the lexical grammar. Anything that
/// needs to look further than a fixed pattern, such as string bodies, comments
/// and glued numbers, is finished in small callbacks.
pub mod raw;
/// Token kinds, positions and the token type itself.
pub mod token;
/// Position tracking and separator promotion on top of the raw scanner.
///
/// # Responsibilities
/// - Tracks 1-based line and column, expanding tabs to the next tab stop.
/// - Promotes line breaks to separators when they can end a statement.
/// - Emits exactly one end-of-input token, or one error token on failure.
pub mod tokenizer;

pub use tokenizer::tokenize;
