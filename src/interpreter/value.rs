/// The runtime value type.
///
/// Defines the closed `Value` enum, its truthiness rule, type names for error
/// messages and how values are printed.
pub mod core;
/// Flow-control signals.
///
/// `return`, `break` and `continue` evaluate to a signal value rather than
/// raising an error. Blocks stop at the first signal and hand it upward until
/// a function call unwraps a return.
pub mod flow;
/// First-class function values.
///
/// A function pairs its parameter names and compiled body with the scope it
/// was defined in. Calls bind arguments in a fresh child of that scope.
pub mod function;
