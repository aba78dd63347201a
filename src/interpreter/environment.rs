use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

struct Scope {
    bindings: HashMap<String, Value>,
    parent:   Option<Environment>,
}

/// A shared handle to one scope in a chain of lexical scopes.
///
/// Cloning the handle does not copy the scope: every clone sees the same
/// bindings. This is how a function value keeps its defining scope alive and
/// observes later writes to it.
///
/// # Example
/// ```
/// use meh::interpreter::{environment::Environment, value::core::Value};
///
/// let root = Environment::new_root();
/// root.set("x", Value::Integer(1));
///
/// let child = root.child();
/// child.set("x", Value::Integer(2));
///
/// assert_eq!(child.get("x"), Value::Integer(2));
/// assert_eq!(root.get("x"), Value::Integer(1));
/// assert_eq!(root.get("y"), Value::Nil);
/// ```
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a scope with no parent.
    #[must_use]
    pub fn new_root() -> Self {
        Self::with_parent(None)
    }

    /// Creates a new scope whose lookups fall back to this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Self::with_parent(Some(self.clone()))
    }

    fn with_parent(parent: Option<Self>) -> Self {
        Self(Rc::new(RefCell::new(Scope { bindings: HashMap::new(),
                                          parent })))
    }

    /// Looks `name` up, walking outward through parent scopes.
    ///
    /// An unbound name yields [`Value::Nil`]; a miss is not an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.0.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return value.clone();
                }
                scope.parent.clone()
            };

            match parent {
                Some(parent) => current = parent,
                None => return Value::Nil,
            }
        }
    }

    /// Binds `name` in this scope and returns the value.
    ///
    /// The write always lands in this scope, even when an outer scope already
    /// binds the name; the outer binding is shadowed, not updated.
    pub fn set(&self, name: &str, value: Value) -> Value {
        self.0.borrow_mut().bindings.insert(name.to_string(), value.clone());
        value
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<_> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_parent", &scope.parent.is_some())
         .finish()
    }
}
