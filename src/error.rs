/// Lexical errors.
///
/// Failures of the raw scanner: runes that start no token, unterminated
/// strings, malformed numbers and failed reads of the character stream.
pub mod lex_error;
/// Syntax diagnostics.
///
/// Raised by the tree builder when a statement does not reduce to exactly one
/// resolved node or a delimiter is left unmatched. These are reported and the
/// offending statement is dropped; they never abort a parse.
pub mod syntax_error;
/// Compile errors.
///
/// Raised while turning a syntax tree into closures, for example a malformed
/// function literal or an assignment to something other than a name.
pub mod compile_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while invoking compiled
/// closures, such as type mismatches, calls to non-functions, wrong argument
/// counts and integer overflow.
pub mod runtime_error;

pub use compile_error::CompileError;
pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure that stops a program from producing a value.
///
/// Syntax diagnostics are not part of this: the tree builder recovers from
/// them and only logs them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The syntax tree could not be compiled.
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
