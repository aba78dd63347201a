use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Closure, EvalResult},
        lexer::token::Position,
        value::{
            core::Value,
            flow::{Flow, FlowKind},
        },
    },
};

/// A function value: compiled body plus the scope it closes over.
///
/// The body is compiled once, when the enclosing program is compiled. Each
/// evaluation of the `fn` literal only pairs that body with the current scope.
pub struct Function {
    /// Parameter names, in order.
    pub params: Vec<String>,
    /// The compiled body block.
    pub body:   Closure,
    /// The scope the literal was evaluated in. A function bound in this same
    /// scope forms an `Rc` cycle with it and is never freed.
    pub scope:  Environment,
}

impl Function {
    /// Calls the function with already evaluated arguments.
    ///
    /// Arguments are bound in a new child of the defining scope, never of the
    /// caller's scope. The result is the payload of a `return`, or otherwise
    /// the value of the last statement of the body. `break` and `continue`
    /// signals that escape the body are passed through unchanged.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ArgumentCountMismatch`] when the argument count
    /// differs from the parameter count, and any error raised by the body.
    pub fn call(&self, args: Vec<Value>, position: &Position) -> EvalResult<Value> {
        if args.len() != self.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: self.params.len(),
                                                             found:    args.len(),
                                                             position: position.clone(), });
        }

        let local = self.scope.child();
        for (name, value) in self.params.iter().zip(args) {
            local.set(name, value);
        }

        Ok(match self.body.invoke(&local)? {
            Value::Flow(Flow { kind: FlowKind::Return,
                               payload, }) => *payload,
            flow @ Value::Flow(_) => flow,
            Value::Tuple(items) if items.len() == 2 => items[1].clone(),
            other => other,
        })
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({})", self.params.join(", "))
    }
}
