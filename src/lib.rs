//! # meh
//!
//! meh is a small interpreted scripting language written in Rust.
//! Source text is tokenized, folded into a syntax tree by staged precedence
//! reductions, and compiled into a tree of closures that runs against a chain
//! of lexical environments. Functions are first-class and close over their
//! defining scope; `return`, `break` and `continue` travel as values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Read;

use crate::interpreter::{
    environment::Environment, evaluator::core::compile_program, parser::parse, value::core::Value,
};

/// Defines the structure of parsed code.
///
/// A syntax tree node wraps the token it was built from together with its
/// children. The same type serves both while the tree builder is still
/// folding a statement and once the statement is accepted.
pub mod ast;
/// Provides unified error types for every phase.
///
/// Lexical and syntax problems are diagnostics that the tree builder recovers
/// from; compile and runtime errors stop a program.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches the source position of the offending token to each error.
/// - Derives `std::error::Error` and `Display` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, compilation, values and
/// environments.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, value and
///   environment.
/// - Provides entry points for each stage on its own.
pub mod interpreter;
/// General utilities shared by several phases.
pub mod util;

pub use error::Error;

/// Parses, compiles and runs a program in a fresh root environment.
///
/// The result is the raw value of the root block: a `(true, last)` tuple, or
/// the flow-control signal that escaped the top level. Use
/// [`Value::program_output`] to get the value a user expects to see.
///
/// Syntax problems are logged and the offending statements skipped; they do
/// not make this fail.
///
/// # Errors
/// Returns [`Error::Compile`] if the tree cannot be compiled and
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use meh::{interpreter::value::core::Value, run};
///
/// let result = run("demo", "f = fn(a, b) { a + b }\nf(2, 3)".as_bytes()).unwrap();
/// assert_eq!(result.program_output(), Value::Integer(5));
///
/// // Adding a string to a number is a type error.
/// assert!(run("demo", r#"1 + "a""#.as_bytes()).is_err());
/// ```
pub fn run(source_name: &str, reader: impl Read) -> Result<Value, Error> {
    let root = parse(source_name, reader);
    let program = compile_program(&root)?;
    Ok(program.invoke(&Environment::new_root())?)
}
