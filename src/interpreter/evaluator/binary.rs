use std::cmp::Ordering;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Closure, CompileResult, EvalResult, compile_operands, invoke_operand},
        lexer::token::{Position, TokenKind},
        value::core::Value,
    },
};

/// Returns `true` for the operators [`compile_binary`] handles.
#[must_use]
pub const fn is_arithmetic(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Plus
             | TokenKind::Minus
             | TokenKind::Mult
             | TokenKind::Div
             | TokenKind::Modulo
             | TokenKind::Less
             | TokenKind::Greater
             | TokenKind::LessOrEqual
             | TokenKind::GreaterOrEqual
             | TokenKind::Equal
             | TokenKind::NotEqual)
}

/// Compiles an arithmetic or comparison operator.
///
/// Both operands are evaluated, left first. A flow-control signal from either
/// one is returned unchanged and skips the operation. Otherwise the operation is
/// chosen from the runtime types:
///
/// 1. two integers use integer arithmetic, checked for overflow and division
///    by zero
/// 2. any mix of integers and floats is promoted to float (no `%`)
/// 3. two strings support `+` (concatenation) and the comparisons
///
/// Anything else is a [`RuntimeError::TypeMismatch`] naming both types.
///
/// # Errors
/// Returns a compile error if the node does not have two operands or one of
/// them fails to compile.
pub fn compile_binary(node: &Node) -> CompileResult<Closure> {
    let [left, right] = compile_operands::<2>(node)?;
    let kind = node.kind();
    let operator = node.text().to_string();
    let position = node.token.position.clone();

    Ok(Closure::new(move |env| {
        let lhs = invoke_operand!(left, env);
        let rhs = invoke_operand!(right, env);

        apply(kind, &lhs, &rhs, &position)?.ok_or_else(|| {
                                               RuntimeError::TypeMismatch { operator: operator.clone(),
                                                                            left:     lhs.type_name(),
                                                                            right:    rhs.type_name(),
                                                                            position: position.clone(), }
                                           })
    }))
}

/// Compiles `&&` and `||`.
///
/// The right operand only runs when the left one does not decide the result.
/// Whichever operand decided is returned as is, not converted to a boolean. A
/// flow-control signal from the left operand is returned before any test.
///
/// # Example
/// ```
/// use meh::run;
/// use meh::interpreter::value::core::Value;
///
/// let result = run("demo", "x = 1\nfalse && (x = 2)\nx".as_bytes()).unwrap();
///
/// assert_eq!(result.program_output(), Value::Integer(1));
/// ```
pub fn compile_logic(node: &Node) -> CompileResult<Closure> {
    let [left, right] = compile_operands::<2>(node)?;
    let short_circuit_on = node.kind() == TokenKind::Or;

    Ok(Closure::new(move |env| {
        let lhs = invoke_operand!(left, env);
        if lhs.is_truthy() == short_circuit_on {
            return Ok(lhs);
        }
        right.invoke(env)
    }))
}

/// Applies `kind` to two operand values.
///
/// Returns `Ok(None)` when no operation is defined for the operand types.
fn apply(kind: TokenKind, lhs: &Value, rhs: &Value, position: &Position) -> EvalResult<Option<Value>> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => integer_op(kind, *a, *b, position),
        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            Ok(real_op(kind, as_real(lhs), as_real(rhs)))
        },
        (Value::String(a), Value::String(b)) => Ok(string_op(kind, a, b)),
        _ => Ok(None),
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_real(value: &Value) -> f64 {
    match value {
        Value::Integer(i) => *i as f64,
        Value::Real(r) => *r,
        _ => f64::NAN,
    }
}

fn integer_op(kind: TokenKind, a: i64, b: i64, position: &Position) -> EvalResult<Option<Value>> {
    let checked = |result: Option<i64>| {
        result.map(|i| Some(Value::Integer(i)))
              .ok_or_else(|| RuntimeError::Overflow { position: position.clone() })
    };

    match kind {
        TokenKind::Plus => checked(a.checked_add(b)),
        TokenKind::Minus => checked(a.checked_sub(b)),
        TokenKind::Mult => checked(a.checked_mul(b)),
        TokenKind::Div | TokenKind::Modulo if b == 0 => {
            Err(RuntimeError::DivisionByZero { position: position.clone() })
        },
        TokenKind::Div => checked(a.checked_div(b)),
        TokenKind::Modulo => checked(a.checked_rem(b)),
        _ => Ok(compare(kind, a.cmp(&b)).map(Value::Bool)),
    }
}

fn real_op(kind: TokenKind, a: f64, b: f64) -> Option<Value> {
    match kind {
        TokenKind::Plus => Some(Value::Real(a + b)),
        TokenKind::Minus => Some(Value::Real(a - b)),
        TokenKind::Mult => Some(Value::Real(a * b)),
        TokenKind::Div => Some(Value::Real(a / b)),
        TokenKind::Modulo => None,
        #[allow(clippy::float_cmp)]
        TokenKind::Equal => Some(Value::Bool(a == b)),
        #[allow(clippy::float_cmp)]
        TokenKind::NotEqual => Some(Value::Bool(a != b)),
        _ => a.partial_cmp(&b)
              .map_or(Some(Value::Bool(false)), |order| compare(kind, order).map(Value::Bool)),
    }
}

fn string_op(kind: TokenKind, a: &str, b: &str) -> Option<Value> {
    match kind {
        TokenKind::Plus => Some(Value::from(format!("{a}{b}"))),
        _ => compare(kind, a.cmp(b)).map(Value::Bool),
    }
}

/// Evaluates a comparison operator against an ordering.
///
/// Returns `None` for operators that are not comparisons.
const fn compare(kind: TokenKind, order: Ordering) -> Option<bool> {
    match kind {
        TokenKind::Less => Some(order.is_lt()),
        TokenKind::Greater => Some(order.is_gt()),
        TokenKind::LessOrEqual => Some(order.is_le()),
        TokenKind::GreaterOrEqual => Some(order.is_ge()),
        TokenKind::Equal => Some(order.is_eq()),
        TokenKind::NotEqual => Some(order.is_ne()),
        _ => None,
    }
}
