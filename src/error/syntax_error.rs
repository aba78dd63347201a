use crate::interpreter::lexer::token::Position;

/// A statement-level problem found while building the syntax tree.
///
/// The tree builder reports each of these and keeps going, so a single bad
/// statement never hides the rest of the program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The tokenizer stopped on a lexical error.
    #[error("{position}: {message}")]
    Lexical {
        /// What the tokenizer reported.
        message:  String,
        /// Where scanning failed.
        position: Position,
    },
    /// An opening brace or parenthesis never closed.
    #[error("{position}: unclosed '{delimiter}'")]
    UnclosedDelimiter {
        /// The opening delimiter.
        delimiter: String,
        /// Where it was opened.
        position:  Position,
    },
    /// A closing brace or parenthesis with nothing to close.
    #[error("{position}: unmatched '{delimiter}'")]
    UnmatchedDelimiter {
        /// The closing delimiter.
        delimiter: String,
        /// Where it appeared.
        position:  Position,
    },
    /// An operator that could not be folded with operands on both sides.
    #[error("{position}: misplaced operator '{operator}'")]
    MisplacedOperator {
        /// The operator text.
        operator: String,
        /// Where the operator appeared.
        position: Position,
    },
    /// A statement that reduced to more than one expression.
    #[error("{position}: statement did not resolve to a single expression ({count} remain)")]
    UnresolvedStatement {
        /// How many expressions were left side by side.
        count:    usize,
        /// Where the statement starts.
        position: Position,
    },
}
