use std::rc::Rc;

use crate::{
    ast::Node,
    error::{CompileError, RuntimeError},
    interpreter::{
        evaluator::core::{
            Closure, CompileResult, EvalResult, binding_name, compile, compile_all,
            compile_operands, invoke_operand, malformed,
        },
        lexer::token::{Position, TokenKind},
        value::{core::Value, function::Function},
    },
};

/// Compiles a `fn` literal.
///
/// The parameter list is checked and the body compiled here, once. Evaluating
/// the literal only creates a [`Function`] value that shares the compiled body
/// and captures the current environment.
///
/// # Errors
/// Returns [`CompileError::MalformedFunction`] when the literal lacks a
/// parameter group or a block body, and [`CompileError::InvalidParameter`] or
/// [`CompileError::ReservedIdentifier`] for a bad parameter.
pub fn compile_function(node: &Node) -> CompileResult<Closure> {
    let [params, body] = node.children.as_slice() else {
        return Err(malformed_function(node, "expected a parameter list and a body"));
    };
    if params.kind() != TokenKind::LeftParen {
        return Err(malformed_function(node, "missing parameter list"));
    }
    if body.kind() != TokenKind::LeftBrace {
        return Err(malformed_function(node, "missing block body"));
    }

    let names = match params.children.as_slice() {
        [] => Vec::new(),
        [list] if list.kind() == TokenKind::Comma => {
            list.children.iter().map(parameter_name).collect::<CompileResult<Vec<_>>>()?
        },
        [single] => vec![parameter_name(single)?],
        _ => return Err(malformed_function(node, "parameters must be a single comma list")),
    };
    let body = compile(body)?;

    Ok(Closure::new(move |env| {
        Ok(Value::Function(Rc::new(Function { params: names.clone(),
                                              body:   body.clone(),
                                              scope:  env.clone(), })))
    }))
}

/// Compiles a function application `callee(args)`.
///
/// The callee is evaluated first and must be a function. Arguments are then
/// evaluated left to right and passed to [`Function::call`]. A flow-control
/// signal from the callee or any argument abandons the call and is returned
/// instead.
///
/// # Errors
/// Returns [`CompileError::MalformedArguments`] when the argument group holds
/// more than one statement.
pub fn compile_apply(node: &Node) -> CompileResult<Closure> {
    let [callee, args] = node.children.as_slice() else {
        return Err(malformed(node, 2));
    };
    let callee = compile(callee)?;
    let args = match args.children.as_slice() {
        [] => Vec::new(),
        [list] if list.kind() == TokenKind::Comma => compile_all(&list.children)?,
        [single] => vec![compile(single)?],
        _ => {
            return Err(CompileError::MalformedArguments { position: args.token.position.clone() });
        },
    };
    let position = node.token.position.clone();

    Ok(Closure::new(move |env| {
        let function = callable(invoke_operand!(callee, env), &position)?;
        let mut values = Vec::with_capacity(args.len());
        for arg in &args {
            values.push(invoke_operand!(arg, env));
        }
        function.call(values, &position)
    }))
}

/// Compiles `x >> f`, which calls `f` with the single argument `x`.
pub fn compile_pipe(node: &Node) -> CompileResult<Closure> {
    let [input, callee] = compile_operands::<2>(node)?;
    let position = node.token.position.clone();

    Ok(Closure::new(move |env| {
        let value = invoke_operand!(input, env);
        let function = callable(invoke_operand!(callee, env), &position)?;
        function.call(vec![value], &position)
    }))
}

fn callable(value: Value, position: &Position) -> EvalResult<Rc<Function>> {
    match value {
        Value::Function(function) => Ok(function),
        other => Err(RuntimeError::NotCallable { found:    other.type_name(),
                                                 position: position.clone(), }),
    }
}

fn parameter_name(node: &Node) -> CompileResult<String> {
    binding_name(node, |found, position| CompileError::InvalidParameter { found, position })
}

fn malformed_function(node: &Node, details: &str) -> CompileError {
    CompileError::MalformedFunction { details:  details.to_string(),
                                      position: node.token.position.clone(), }
}
