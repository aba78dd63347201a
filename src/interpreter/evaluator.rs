/// Compilation entry point, the closure type and the simple node kinds.
///
/// Contains the dispatch over node kinds, literals, names, blocks, groups,
/// assignment, comma tuples and flow-control keywords.
pub mod core;

/// Binary operator compilation.
///
/// Arithmetic and comparison with integer, float and string dispatch, plus the
/// short-circuiting logical operators.
pub mod binary;

/// Unary operator compilation.
///
/// Logical not and arithmetic negation.
pub mod unary;

/// Function literal, application and pipe compilation.
pub mod function;

pub use core::{Closure, EvalResult, compile};
