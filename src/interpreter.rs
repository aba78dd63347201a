/// The environment module holds variable scopes.
///
/// An environment is a shared handle to one scope in a chain. Function calls
/// create child scopes of the function's defining scope; blocks do not create
/// scopes at all.
///
/// # Responsibilities
/// - Looks names up through the parent chain, yielding `nil` on a miss.
/// - Binds names in the current scope only.
pub mod environment;
/// The evaluator module compiles syntax trees into closures.
///
/// Every node is turned into a closure once; running a program is invoking
/// the root closure against an environment. Flow-control signals travel as
/// values and runtime errors propagate through `Result`.
///
/// # Responsibilities
/// - Compiles every node kind, rejecting malformed trees up front.
/// - Dispatches operators on the runtime types of their operands.
/// - Implements function values, calls, short-circuit logic and blocks.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, text and source position. Line breaks become statement
/// separators only where a statement can end.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Scans numbers, the three string flavors, comments and operators.
/// - Reports the first lexical error as an error token and stops.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// Instead of a recursive-descent grammar the parser groups brackets, splits
/// statements and then folds each statement through a fixed sequence of
/// precedence tiers until a single resolved node is left.
///
/// # Responsibilities
/// - Builds brace and parenthesis groups, reporting unbalanced delimiters.
/// - Reduces each statement and desugars compound assignment.
/// - Drops statements that do not reduce, after reporting them.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are nil, booleans, integers, floats, strings, tuples, functions and
/// flow-control signals.
pub mod value;
