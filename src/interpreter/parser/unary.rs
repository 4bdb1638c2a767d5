use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Literal, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix operators.
    ///
    /// Unary operators nest to the right: `!!x` parses as `!(!x)`. They bind
    /// tighter than any binary operator, so `-a * b` is `(-a) * b`.
    ///
    /// Grammar: `unary := ("!" | "-") unary | primary`
    pub(super) fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.nested(Self::unary)?;
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    /// Parses the highest-precedence expressions.
    ///
    /// Grammar:
    /// ```text
    /// primary := NUMBER | STRING | "true" | "false" | "nil"
    ///          | IDENTIFIER | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// `Expect expression.` when the current token cannot start an
    /// expression, and `Expect ')' after expression.` for an unclosed group.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();

        let expr = match token.kind {
            TokenKind::False => Expr::literal(false),
            TokenKind::True => Expr::literal(true),
            TokenKind::Nil => Expr::Literal { value: LiteralValue::Nil },
            TokenKind::Number | TokenKind::String => match &token.literal {
                Some(Literal::Number(n)) => Expr::literal(*n),
                Some(Literal::String(s)) => Expr::literal(s.as_str()),
                None => return Err(ParseError::new("Expect expression.", token)),
            },
            TokenKind::Identifier => Expr::Variable { name: token.clone() },
            TokenKind::LeftParen => {
                self.advance();
                let expression = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(expression));
            },
            _ => return Err(ParseError::new("Expect expression.", token)),
        };

        self.advance();
        Ok(expr)
    }
}
