use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Closure, CompileResult, compile_operands, invoke_operand},
        value::core::Value,
    },
};

/// Compiles `!x`, which yields the negated truthiness of `x`.
pub fn compile_not(node: &Node) -> CompileResult<Closure> {
    let [operand] = compile_operands::<1>(node)?;

    Ok(Closure::new(move |env| {
        let value = invoke_operand!(operand, env);
        Ok(Value::Bool(!value.is_truthy()))
    }))
}

/// Compiles unary `-`.
///
/// Integers are negated with an overflow check, floats directly. Any other
/// operand type is a [`RuntimeError::UnaryTypeMismatch`].
pub fn compile_negate(node: &Node) -> CompileResult<Closure> {
    let [operand] = compile_operands::<1>(node)?;
    let operator = node.text().to_string();
    let position = node.token.position.clone();

    Ok(Closure::new(move |env| match invoke_operand!(operand, env) {
                        Value::Integer(i) => {
                            i.checked_neg()
                             .map(Value::Integer)
                             .ok_or_else(|| RuntimeError::Overflow { position: position.clone() })
                        },
                        Value::Real(r) => Ok(Value::Real(-r)),
                        other => Err(RuntimeError::UnaryTypeMismatch { operator: operator.clone(),
                                                                       operand:  other.type_name(),
                                                                       position: position.clone(), }),
                    }))
}
