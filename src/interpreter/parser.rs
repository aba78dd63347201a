/// Entry points and the per-statement reduction pipeline.
///
/// Wires the token stream through grouping, statement splitting, reduction and
/// validation, and collects the diagnostics raised along the way.
pub mod core;

/// Statement splitting and bracket grouping.
///
/// Turns the flat token stream into batches of nodes, one per statement, with
/// every brace or parenthesis region already built into a single group node.
pub mod statement;

/// Group-level reductions.
///
/// Folds function literals and applications, and unwraps parenthesized
/// groups that hold a single statement.
pub mod block;

/// Prefix operator reduction.
///
/// Folds `!` and unary `-`, and attaches the operand of a leading `return`.
pub mod unary;

/// Binary operator reduction.
///
/// Folds the infix precedence tiers, the comma list, right-associative
/// assignment, and desugars compound assignment.
pub mod binary;

pub use core::{parse, parse_with_diagnostics};
