use std::{fmt, rc::Rc};

use crate::interpreter::value::{
    flow::{Flow, FlowKind},
    function::Function,
};

/// Represents a runtime value in the interpreter.
///
/// Strings, tuples and functions are reference counted, so cloning a value is
/// always cheap.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value. Also what looking up an unbound name yields.
    Nil,
    /// `true` or `false`.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Real(f64),
    /// An immutable string.
    String(Rc<str>),
    /// An ordered, fixed sequence of values.
    Tuple(Rc<Vec<Self>>),
    /// A first-class function.
    Function(Rc<Function>),
    /// A `return`, `break` or `continue` signal on its way out.
    Flow(Flow),
}

impl Value {
    /// Builds a tuple value.
    #[must_use]
    pub fn tuple(items: Vec<Self>) -> Self {
        Self::Tuple(Rc::new(items))
    }

    /// Builds a string value.
    #[must_use]
    pub fn string(text: &str) -> Self {
        Self::String(Rc::from(text))
    }

    /// The name of this value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::String(_) => "string",
            Self::Tuple(_) => "tuple",
            Self::Function(_) => "function",
            Self::Flow(_) => "flow",
        }
    }

    /// Decides how the value behaves as a condition.
    ///
    /// A boolean is itself and a tuple is as truthy as its first element.
    /// Everything else is truthy, including `0`, `""`, `nil` and the empty
    /// tuple.
    ///
    /// # Example
    /// ```
    /// use meh::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::tuple(vec![Value::Bool(false), Value::Integer(1)]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Tuple(items) => items.first().is_none_or(Self::is_truthy),
            _ => true,
        }
    }

    /// Returns the flow-control signal if this value is one.
    #[must_use]
    pub const fn as_flow(&self) -> Option<&Flow> {
        match self {
            Self::Flow(flow) => Some(flow),
            _ => None,
        }
    }

    /// The value a program run reports to its caller.
    ///
    /// A block result `(true, last)` yields `last`; an escaped `return` yields
    /// its payload. Anything else is returned as is.
    ///
    /// # Example
    /// ```
    /// use meh::interpreter::value::core::Value;
    ///
    /// let result = Value::tuple(vec![Value::Bool(true), Value::Integer(3)]);
    ///
    /// assert_eq!(result.program_output(), Value::Integer(3));
    /// ```
    #[must_use]
    pub fn program_output(&self) -> Self {
        match self {
            Self::Tuple(items) if items.len() == 2 => items[1].clone(),
            Self::Flow(Flow { kind: FlowKind::Return,
                              payload, }) => (**payload).clone(),
            other => other.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Flow(a), Self::Flow(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Flow> for Value {
    fn from(v: Flow) -> Self {
        Self::Flow(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::Flow(flow) => write!(f, "{flow}"),
        }
    }
}
