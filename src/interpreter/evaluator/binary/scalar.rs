use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// `-`, `*` and `/` need two numbers. `+` adds two numbers or
    /// concatenates two strings; the left operand decides which, and the
    /// right one must match it. Nothing is ever coerced, so `1 + "1"` and
    /// `"1" + 1` both fail.
    ///
    /// Division follows IEEE 754: dividing by zero gives an infinity or NaN,
    /// not an error.
    ///
    /// # Errors
    /// `InvalidOperand` naming the operator and the first operand of the
    /// wrong type.
    pub(crate) fn eval_arithmetic(operator: &Token,
                                  left: Value,
                                  right: Value)
                                  -> EvalResult<Value> {
        let invalid = |value| RuntimeError::InvalidOperand { operator: operator.clone(),
                                                             value };

        match (operator.kind, left, right) {
            (TokenKind::Plus, Value::String(mut l), Value::String(r)) => {
                l.push_str(&r);
                Ok(Value::String(l))
            },
            (TokenKind::Plus, Value::String(_), right) => Err(invalid(right)),
            (kind, Value::Number(l), Value::Number(r)) => match kind {
                TokenKind::Plus => Ok(Value::Number(l + r)),
                TokenKind::Minus => Ok(Value::Number(l - r)),
                TokenKind::Star => Ok(Value::Number(l * r)),
                TokenKind::Slash => Ok(Value::Number(l / r)),
                _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
            },
            (_, Value::Number(_), right) => Err(invalid(right)),
            (_, left, _) => Err(invalid(left)),
        }
    }
}
