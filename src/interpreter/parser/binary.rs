use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub(super) fn expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::assignment)
    }

    /// Parses an assignment.
    ///
    /// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
    /// The target is parsed as an ordinary expression first; only a variable
    /// reference is a valid target. Any other target records
    /// `Invalid assignment target.` at the `=` and parsing continues with the
    /// left-hand side.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if self.matches(&[TokenKind::Equal]) {
            let equals = self.previous();
            let value = self.expression()?;

            if let Expr::Variable { name } = expr {
                return Ok(Expr::Assign { name,
                                         value: Box::new(value) });
            }

            self.errors.push(ParseError::new("Invalid assignment target.", equals));
        }

        Ok(expr)
    }

    /// Parses a chain of `or` operations.
    ///
    /// Grammar: `logic_or := logic_and ("or" logic_and)*`
    fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.logic_and()?;

        while self.matches(&[TokenKind::Or]) {
            let operator = self.previous().clone();
            let right = self.logic_and()?;
            left = Expr::logical(left, operator, right);
        }

        Ok(left)
    }

    /// Parses a chain of `and` operations.
    ///
    /// Grammar: `logic_and := equality ("and" equality)*`
    fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.equality()?;

        while self.matches(&[TokenKind::And]) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            left = Expr::logical(left, operator, right);
        }

        Ok(left)
    }

    /// Parses equality comparisons.
    ///
    /// Grammar: `equality := comparison (("==" | "!=") comparison)*`
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.comparison()?;

        while self.matches(&[TokenKind::EqualEqual, TokenKind::BangEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            left = Expr::binary(left, operator, right);
        }

        Ok(left)
    }

    /// Parses ordering comparisons.
    ///
    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;

        while self.matches(&[TokenKind::Greater,
                             TokenKind::GreaterEqual,
                             TokenKind::Less,
                             TokenKind::LessEqual])
        {
            let operator = self.previous().clone();
            let right = self.term()?;
            left = Expr::binary(left, operator, right);
        }

        Ok(left)
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `term := factor (("+" | "-") factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;

        while self.matches(&[TokenKind::Plus, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            left = Expr::binary(left, operator, right);
        }

        Ok(left)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `factor := unary (("*" | "/") unary)*`
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut left = self.unary()?;

        while self.matches(&[TokenKind::Star, TokenKind::Slash]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            left = Expr::binary(left, operator, right);
        }

        Ok(left)
    }
}
