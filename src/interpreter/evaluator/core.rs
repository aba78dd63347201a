use std::{fmt, rc::Rc};

use tracing::debug;

use crate::{
    ast::Node,
    error::{CompileError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{binary, function, unary},
        lexer::token::{Position, TokenKind},
        value::{
            core::Value,
            flow::{Flow, FlowKind},
        },
    },
    util::escape::literal_value,
};

/// Result type of invoking a compiled closure.
///
/// Flow-control signals are `Ok` values; only real failures are `Err`.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type of compiling a node.
pub type CompileResult<T> = Result<T, CompileError>;

/// Invokes a closure and yields its value, or returns the value from the
/// enclosing closure when it is a flow-control signal.
macro_rules! invoke_operand {
    ($closure:expr, $env:expr) => {{
        let value = $closure.invoke($env)?;
        if value.as_flow().is_some() {
            return Ok(value);
        }
        value
    }};
}

pub(crate) use invoke_operand;

/// Names that always denote fixed values and can never be bound.
pub const RESERVED: [&str; 3] = ["true", "false", "nil"];

/// The compiled, directly invocable form of a syntax node.
///
/// A closure is built once per node and can then be invoked any number of
/// times, against any environment. Cloning shares the compiled code.
#[derive(Clone)]
pub struct Closure(Rc<dyn Fn(&Environment) -> EvalResult<Value>>);

impl Closure {
    /// Wraps a Rust closure.
    pub fn new(f: impl Fn(&Environment) -> EvalResult<Value> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A closure that ignores the environment and yields `value`.
    #[must_use]
    pub fn fixed(value: Value) -> Self {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Runs the compiled code against `env`.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere inside.
    ///
    /// # Example
    /// ```
    /// use meh::interpreter::{
    ///     environment::Environment, evaluator::compile, parser::parse, value::core::Value,
    /// };
    ///
    /// let root = parse("demo", "1 + 2".as_bytes());
    /// let program = compile(&root).unwrap();
    /// let result = program.invoke(&Environment::new_root()).unwrap();
    ///
    /// assert_eq!(result, Value::tuple(vec![Value::Bool(true), Value::Integer(3)]));
    /// ```
    pub fn invoke(&self, env: &Environment) -> EvalResult<Value> {
        (self.0)(env)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Closure")
    }
}

/// Compiles a syntax node, and everything below it, into a closure.
///
/// Each node kind has a fixed compilation rule:
///
/// - blocks run their statements in order and yield `(true, last)`, or the
///   first flow-control signal a statement produced
/// - literals yield a fixed value; strings are unescaped here, once
/// - names look themselves up, except `true`, `false` and `nil`
/// - operators compile their operands and dispatch on runtime types
/// - `fn` literals capture the current environment when evaluated
///
/// # Errors
/// Returns a [`CompileError`] for the first node that cannot be compiled. No
/// partial program is returned.
pub fn compile(node: &Node) -> CompileResult<Closure> {
    match node.kind() {
        TokenKind::LeftBrace => compile_block(node),
        TokenKind::LeftParen => compile_group(node),
        TokenKind::Ident => Ok(compile_ident(node)),
        TokenKind::Number => compile_number(node),
        kind if kind.is_string() => compile_string(node),
        TokenKind::Break => Ok(Closure::fixed(Flow::bare(FlowKind::Break).into())),
        TokenKind::Continue => Ok(Closure::fixed(Flow::bare(FlowKind::Continue).into())),
        TokenKind::Return => compile_return(node),
        TokenKind::Assign => compile_assign(node),
        TokenKind::Comma => compile_comma(node),
        TokenKind::Function => function::compile_function(node),
        TokenKind::Apply => function::compile_apply(node),
        TokenKind::Pipe => function::compile_pipe(node),
        TokenKind::And | TokenKind::Or => binary::compile_logic(node),
        TokenKind::Not => unary::compile_not(node),
        TokenKind::Minus if node.children.len() == 1 => unary::compile_negate(node),
        kind if binary::is_arithmetic(kind) => binary::compile_binary(node),
        kind => Err(CompileError::Unsupported { kind,
                                                position: node.token.position.clone() }),
    }
}

/// Compiles a whole program and logs its size.
///
/// # Errors
/// See [`compile`].
pub fn compile_program(root: &Node) -> CompileResult<Closure> {
    let program = compile(root)?;
    debug!(statements = root.children.len(), "compiled program");
    Ok(program)
}

/// The error for a node with the wrong number of children.
pub(crate) fn malformed(node: &Node, expected: usize) -> CompileError {
    CompileError::MalformedNode { kind: node.kind(),
                                  expected,
                                  found: node.children.len(),
                                  position: node.token.position.clone() }
}

/// Compiles exactly `N` children of `node`.
pub(crate) fn compile_operands<const N: usize>(node: &Node) -> CompileResult<[Closure; N]> {
    compile_all(&node.children)?.try_into()
                                .map_err(|_| malformed(node, N))
}

pub(crate) fn compile_all(nodes: &[Node]) -> CompileResult<Vec<Closure>> {
    nodes.iter().map(compile).collect()
}

fn compile_block(node: &Node) -> CompileResult<Closure> {
    let statements = compile_all(&node.children)?;

    Ok(Closure::new(move |env| {
        let mut last = Value::Nil;
        for statement in &statements {
            last = statement.invoke(env)?;
            if last.as_flow().is_some() {
                return Ok(last);
            }
        }
        Ok(Value::tuple(vec![Value::Bool(true), last]))
    }))
}

/// A parenthesized group that was not unwrapped: empty, or several
/// statements. Yields the last value, or the empty tuple.
fn compile_group(node: &Node) -> CompileResult<Closure> {
    let statements = compile_all(&node.children)?;

    Ok(Closure::new(move |env| {
        let mut last = Value::tuple(Vec::new());
        for statement in &statements {
            last = statement.invoke(env)?;
            if last.as_flow().is_some() {
                break;
            }
        }
        Ok(last)
    }))
}

fn compile_ident(node: &Node) -> Closure {
    match node.text() {
        "true" => Closure::fixed(Value::Bool(true)),
        "false" => Closure::fixed(Value::Bool(false)),
        "nil" => Closure::fixed(Value::Nil),
        name => {
            let name = name.to_string();
            Closure::new(move |env| Ok(env.get(&name)))
        },
    }
}

fn compile_number(node: &Node) -> CompileResult<Closure> {
    let text = node.text();
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Closure::fixed(Value::Integer(i)));
    }
    if let Ok(r) = text.parse::<f64>() {
        return Ok(Closure::fixed(Value::Real(r)));
    }

    Err(CompileError::InvalidNumber { text:     text.to_string(),
                                      position: node.token.position.clone(), })
}

fn compile_string(node: &Node) -> CompileResult<Closure> {
    let text = literal_value(node.kind(), node.text()).map_err(|source| {
                   CompileError::InvalidString { source,
                                                 position: node.token.position.clone() }
               })?;
    Ok(Closure::fixed(Value::from(text)))
}

/// `return` with no operand returns `nil`; `return a, b` returns a tuple
/// because the comma list already evaluates to one.
fn compile_return(node: &Node) -> CompileResult<Closure> {
    match node.children.as_slice() {
        [] => Ok(Closure::fixed(Flow::returning(Value::Nil).into())),
        [operand] => {
            let operand = compile(operand)?;
            Ok(Closure::new(move |env| {
                let value = invoke_operand!(operand, env);
                Ok(Flow::returning(value).into())
            }))
        },
        _ => Err(malformed(node, 1)),
    }
}

fn compile_assign(node: &Node) -> CompileResult<Closure> {
    let [target, value] = node.children.as_slice() else {
        return Err(malformed(node, 2));
    };
    let name = binding_name(target, |found, position| {
                   CompileError::InvalidAssignmentTarget { found, position }
               })?;
    let value = compile(value)?;

    Ok(Closure::new(move |env| {
        let value = invoke_operand!(value, env);
        Ok(env.set(&name, value))
    }))
}

/// Items are evaluated left to right; a signal from any item stops the list
/// and becomes its value.
fn compile_comma(node: &Node) -> CompileResult<Closure> {
    let items = compile_all(&node.children)?;

    Ok(Closure::new(move |env| {
        let mut values = Vec::with_capacity(items.len());
        for item in &items {
            values.push(invoke_operand!(item, env));
        }
        Ok(Value::tuple(values))
    }))
}

/// Returns the name `node` binds, if it is a plain, non-reserved identifier.
///
/// `not_a_name` builds the error for anything that is not an identifier.
pub(crate) fn binding_name(node: &Node,
                           not_a_name: impl FnOnce(String, Position) -> CompileError)
                           -> CompileResult<String> {
    if node.kind() != TokenKind::Ident {
        return Err(not_a_name(node.to_string(), node.token.position.clone()));
    }
    if RESERVED.contains(&node.text()) {
        return Err(CompileError::ReservedIdentifier { name:     node.text().to_string(),
                                                      position: node.token.position.clone(), });
    }
    Ok(node.text().to_string())
}
