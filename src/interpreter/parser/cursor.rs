use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Stands in for the end of a token slice that was not terminated by the
/// scanner.
static MISSING_EOF: Token = Token { kind:    TokenKind::Eof,
                                    line:    1,
                                    lexeme:  String::new(),
                                    literal: None, };

impl<'t> Parser<'t> {
    /// Returns the token under the cursor without consuming it.
    pub(super) fn peek(&self) -> &'t Token {
        self.tokens.get(self.current).unwrap_or(&MISSING_EOF)
    }

    /// Returns the most recently consumed token.
    pub(super) fn previous(&self) -> &'t Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&MISSING_EOF)
    }

    /// Returns `true` once the cursor has reached `Eof`.
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token and returns it. At the end of input the
    /// cursor stays on `Eof`.
    pub(super) fn advance(&mut self) -> &'t Token {
        if !self.is_at_end() {
            self.current += 1;
            trace!(position = self.current, token = %self.previous(), "advanced");
        }
        self.previous()
    }

    /// Returns `true` if the current token is of the given kind. Always
    /// `false` at the end of input.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it is one of `kinds`.
    pub(super) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the expected kind.
    ///
    /// # Errors
    /// A `ParseError` carrying `message` and bound to the current token if it
    /// has a different kind.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<&'t Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(message, self.peek()))
        }
    }
}
