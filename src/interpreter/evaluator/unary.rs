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
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `-`: numeric negation. Any other operand is an `InvalidOperand`.
    /// - `!`: the complement of the operand's truthiness. Accepts any value.
    ///
    /// # Parameters
    /// - `operator`: The operator token, kept for error reporting.
    /// - `value`: The operand.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, 1, "-", None);
    /// let bang = Token::new(TokenKind::Bang, 1, "!", None);
    ///
    /// let v = Interpreter::<Vec<u8>>::eval_unary(&minus, Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Interpreter::<Vec<u8>>::eval_unary(&bang, Value::Number(0.0)).unwrap();
    /// assert_eq!(v, Value::Bool(false));
    ///
    /// assert!(Interpreter::<Vec<u8>>::eval_unary(&minus, Value::Nil).is_err());
    /// ```
    pub fn eval_unary(operator: &Token, value: Value) -> EvalResult<Value> {
        match (operator.kind, value) {
            (TokenKind::Minus, Value::Number(n)) => Ok(Value::Number(-n)),
            (TokenKind::Bang, value) => Ok(Value::Bool(!value.is_truthy())),
            (_, value) => Err(RuntimeError::InvalidOperand { operator: operator.clone(),
                                                             value }),
        }
    }
}
