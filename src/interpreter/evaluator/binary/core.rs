use std::io::Write;

use crate::interpreter::{
    evaluator::core::{EvalResult, Interpreter},
    lexer::{Token, TokenKind},
    value::core::Value,
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a binary operation between two evaluated operands.
    ///
    /// This function routes the operation to a specialized handler depending
    /// on the operator. Arithmetic and concatenation go to `eval_arithmetic`,
    /// ordering comparisons to `eval_comparison` and equality to
    /// `eval_equality`. `and` and `or` never get here because they must not
    /// evaluate their right operand eagerly; see `eval_logical`.
    ///
    /// # Parameters
    /// - `operator`: The operator token, kept for error reporting.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Panics
    /// If `operator` is not a binary operator token. The parser never builds
    /// such a node.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, 1, "+", None);
    /// let result = Interpreter::<Vec<u8>>::eval_binary(&plus,
    ///                                                  Value::Number(3.0),
    ///                                                  Value::Number(4.0));
    ///
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
        use TokenKind::{
            BangEqual, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Minus, Plus, Slash,
            Star,
        };

        match operator.kind {
            Plus | Minus | Star | Slash => Self::eval_arithmetic(operator, left, right),
            Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(operator, &left, &right)
            },
            EqualEqual => Ok(Value::Bool(Self::eval_equality(&left, &right))),
            BangEqual => Ok(Value::Bool(!Self::eval_equality(&left, &right))),
            _ => unreachable!("eval_binary used with non binary operator {}", operator.kind),
        }
    }
}
