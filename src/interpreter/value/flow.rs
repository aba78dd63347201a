use std::fmt;

use crate::interpreter::value::core::Value;

/// Which non-local exit a [`Flow`] signal requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// Leave the current function, yielding the payload.
    Return,
    /// Leave the innermost loop.
    Break,
    /// Skip to the next loop iteration.
    Continue,
}

/// A flow-control signal.
///
/// Produced only by `return`, `break` and `continue`. It travels as an
/// ordinary value so every consumer has to look at it before using a result as
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    /// What kind of exit this is.
    pub kind:    FlowKind,
    /// The returned value; `nil` for `break` and `continue`.
    pub payload: Box<Value>,
}

impl Flow {
    /// A `return` carrying `payload`.
    #[must_use]
    pub fn returning(payload: Value) -> Self {
        Self { kind:    FlowKind::Return,
               payload: Box::new(payload), }
    }

    /// A payload-less `break` or `continue`.
    #[must_use]
    pub fn bare(kind: FlowKind) -> Self {
        Self { kind,
               payload: Box::new(Value::Nil) }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FlowKind::Return => write!(f, "return({})", self.payload),
            FlowKind::Break => write!(f, "break"),
            FlowKind::Continue => write!(f, "continue"),
        }
    }
}
