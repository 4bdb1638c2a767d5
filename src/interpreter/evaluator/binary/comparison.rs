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
    /// Evaluates `<`, `<=`, `>` and `>=`.
    ///
    /// Both operands must be numbers. Comparisons involving NaN are always
    /// `false`.
    ///
    /// # Errors
    /// `InvalidOperand` naming the operator and the first operand that is not
    /// a number.
    pub(crate) fn eval_comparison(operator: &Token,
                                  left: &Value,
                                  right: &Value)
                                  -> EvalResult<Value> {
        let (Some(l), Some(r)) = (left.as_number(), right.as_number()) else {
            let value = if left.as_number().is_none() { left } else { right };
            return Err(RuntimeError::InvalidOperand { operator: operator.clone(),
                                                      value:    value.clone(), });
        };

        let result = match operator.kind {
            TokenKind::Greater => l > r,
            TokenKind::GreaterEqual => l >= r,
            TokenKind::Less => l < r,
            TokenKind::LessEqual => l <= r,
            _ => unreachable!("eval_comparison used with non comparison operator"),
        };

        Ok(Value::Bool(result))
    }

    /// Compares two values for equality.
    ///
    /// Values of different types are never equal, so `nil == false` and
    /// `0 == "0"` are both `false`. Numbers compare as IEEE doubles: `1 == 1.0`
    /// holds and NaN is not equal to itself.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// type Eval = Interpreter<Vec<u8>>;
    ///
    /// assert!(Eval::eval_equality(&Value::Nil, &Value::Nil));
    /// assert!(!Eval::eval_equality(&Value::Nil, &Value::Bool(false)));
    /// assert!(!Eval::eval_equality(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    /// ```
    #[must_use]
    pub fn eval_equality(left: &Value, right: &Value) -> bool {
        left == right
    }
}
