use tracing::debug;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply statements, groupings, prefix operators and assignments may
/// nest before the parser reports `Too much nesting.` instead of recursing.
pub const MAX_NESTING: usize = 128;

/// The product of a parse: the statements that could be built plus every
/// syntax error, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// Successfully parsed statements.
    pub statements: Vec<Stmt>,
    /// Syntax errors in the order they were found.
    pub errors:     Vec<ParseError>,
}

impl ParseOutput {
    /// Returns `true` if at least one syntax error was recorded.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts the output into the statement list, or the errors if there
    /// were any.
    pub fn into_result(self) -> Result<Vec<Stmt>, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.statements)
        } else {
            Err(self.errors)
        }
    }
}

/// A recursive-descent parser over a token slice.
///
/// Each grammar rule is a method; the methods are spread over the sibling
/// modules by precedence level. The parser never mutates its tokens, it only
/// moves a cursor over them.
///
/// A token slice that lacks a trailing `Eof` is parsed as if one followed it.
/// Nesting deeper than [`MAX_NESTING`] is a syntax error.
pub struct Parser<'t> {
    pub(super) tokens:  &'t [Token],
    pub(super) current: usize,
    pub(super) errors:  Vec<ParseError>,
    depth:              usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               current: 0,
               errors: Vec::new(),
               depth: 0 }
    }

    /// Parses a whole program.
    ///
    /// Grammar: `program := declaration* EOF`
    ///
    /// Parsing never stops at the first error. After a syntax error the
    /// parser skips to the next statement boundary and carries on, so the
    /// output holds every statement it could build and every error it found.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{parser::core::Parser, scanner::Scanner};
    ///
    /// let tokens = Scanner::new("var a = ; print 1; print ;").scan().tokens;
    /// let output = Parser::new(&tokens).parse();
    ///
    /// assert_eq!(output.statements.len(), 1);
    /// assert_eq!(output.errors.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.declaration_with_recovery() {
                statements.push(statement);
            }
        }

        debug!(statements = statements.len(),
               errors = self.errors.len(),
               "parse finished");

        ParseOutput { statements,
                      errors: self.errors }
    }

    /// Parses a single expression that must span the whole token slice.
    ///
    /// Unlike [`Parser::parse`] this gives up at the first error.
    ///
    /// # Errors
    /// The first syntax error, or `Expect end of expression.` if tokens are
    /// left over after the expression.
    pub fn parse_expression(mut self) -> ParseResult<Expr> {
        let expression = self.expression()?;

        if !self.errors.is_empty() {
            return Err(self.errors.swap_remove(0));
        }

        if !self.is_at_end() {
            return Err(ParseError::new("Expect end of expression.", self.peek()));
        }

        Ok(expression)
    }

    /// Parses one declaration, recording the error and synchronizing if it
    /// fails.
    pub(super) fn declaration_with_recovery(&mut self) -> Option<Stmt> {
        match self.declaration() {
            Ok(statement) => Some(statement),
            Err(error) => {
                debug!(%error, "recovering from syntax error");
                self.errors.push(error);
                self.synchronize();
                None
            },
        }
    }

    /// Applies a recursive grammar rule one nesting level deeper.
    ///
    /// # Errors
    /// `Too much nesting.` at the current token once [`MAX_NESTING`] levels
    /// are open, or whatever `rule` returns.
    pub(super) fn nested<T>(&mut self,
                            rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::new("Too much nesting.", self.peek()));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops right after a `;`, or before a keyword that starts a statement,
    /// or at the end of input.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement() {
                return;
            }

            self.advance();
        }
    }
}
