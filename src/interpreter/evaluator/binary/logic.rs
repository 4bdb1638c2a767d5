use std::io::Write;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// The left operand is evaluated first. `or` returns it if it is truthy
    /// and `and` returns it if it is falsey; in both cases the right operand
    /// is never evaluated. Otherwise the result is the value of the right
    /// operand. Results are not coerced to booleans: `nil or "x"` is `"x"`.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `operator`: The `and` or `or` token.
    /// - `right`: Right operand expression.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               operator: &Token,
                               right: &Expr)
                               -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        let decided = match operator.kind {
            TokenKind::Or => left.is_truthy(),
            _ => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.evaluate(right) }
    }
}
