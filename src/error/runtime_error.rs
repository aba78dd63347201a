use crate::interpreter::lexer::token::Position;

/// Represents all errors that can occur during evaluation.
///
/// A runtime error aborts the expression it occurs in and bubbles up through
/// every enclosing closure unchanged. Flow-control signals are never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// No binary operation is defined for the operand types.
    #[error("{position}: type mismatch: cannot apply '{operator}' to {left} and {right}")]
    TypeMismatch {
        /// The operator text.
        operator: String,
        /// Type name of the left operand.
        left:     &'static str,
        /// Type name of the right operand.
        right:    &'static str,
        /// Where the operator appeared.
        position: Position,
    },
    /// No unary operation is defined for the operand type.
    #[error("{position}: type mismatch: cannot apply '{operator}' to {operand}")]
    UnaryTypeMismatch {
        /// The operator text.
        operator: String,
        /// Type name of the operand.
        operand:  &'static str,
        /// Where the operator appeared.
        position: Position,
    },
    /// Called a value that is not a function.
    #[error("{position}: cannot call a value of type {found}")]
    NotCallable {
        /// Type name of the callee.
        found:    &'static str,
        /// Where the call appeared.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("{position}: expected {expected} argument(s), found {found}")]
    ArgumentCountMismatch {
        /// The function's parameter count.
        expected: usize,
        /// How many arguments were passed.
        found:    usize,
        /// Where the call appeared.
        position: Position,
    },
    /// Integer division or remainder by zero.
    #[error("{position}: division by zero")]
    DivisionByZero {
        /// Where the operator appeared.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    #[error("{position}: integer overflow")]
    Overflow {
        /// Where the operator appeared.
        position: Position,
    },
}
