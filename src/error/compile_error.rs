use crate::{
    interpreter::lexer::token::{Position, TokenKind},
    util::escape::EscapeError,
};

/// Represents all errors that can occur while compiling a syntax tree.
///
/// Compilation stops at the first one; no partial program is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A function literal without a parameter group or a block body.
    #[error("{position}: malformed function literal: {details}")]
    MalformedFunction {
        /// What is wrong with it.
        details:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// A parameter that is not a plain name.
    #[error("{position}: invalid parameter '{found}'")]
    InvalidParameter {
        /// The offending parameter as written.
        found:    String,
        /// Where the parameter appeared.
        position: Position,
    },
    /// Assignment to something other than a name.
    #[error("{position}: cannot assign to '{found}'")]
    InvalidAssignmentTarget {
        /// The left side as written.
        found:    String,
        /// Where the assignment appeared.
        position: Position,
    },
    /// Binding one of `true`, `false` or `nil`.
    #[error("{position}: '{name}' is reserved")]
    ReservedIdentifier {
        /// The reserved name.
        name:     String,
        /// Where it was bound.
        position: Position,
    },
    /// A number literal that fits neither an integer nor a float.
    #[error("{position}: invalid number '{text}'")]
    InvalidNumber {
        /// The literal as written.
        text:     String,
        /// Where the literal appeared.
        position: Position,
    },
    /// A string literal with a bad escape sequence.
    #[error("{position}: invalid string literal: {source}")]
    InvalidString {
        /// The escape problem.
        source:   EscapeError,
        /// Where the literal appeared.
        position: Position,
    },
    /// An argument list holding more than one statement.
    #[error("{position}: malformed argument list")]
    MalformedArguments {
        /// Where the argument list starts.
        position: Position,
    },
    /// An operator node with the wrong number of operands.
    #[error("{position}: '{kind}' expects {expected} operand(s), found {found}")]
    MalformedNode {
        /// The node's token kind.
        kind:     TokenKind,
        /// How many children the kind takes.
        expected: usize,
        /// How many it has.
        found:    usize,
        /// Where the node appeared.
        position: Position,
    },
    /// A node kind that has no runtime meaning.
    #[error("{position}: cannot compile '{kind}'")]
    Unsupported {
        /// The node's token kind.
        kind:     TokenKind,
        /// Where the node appeared.
        position: Position,
    },
}
