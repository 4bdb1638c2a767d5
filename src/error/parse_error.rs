use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

/// A syntax error detected by the parser.
///
/// Carries a human-readable message and the token at the point of failure.
/// The token's line drives diagnostics; its lexeme tells the user where on
/// that line the parser gave up.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error on line {}{}: {message}", .token.line, location(.token))]
pub struct ParseError {
    /// What the parser expected, e.g. `Expect ';' after expression.`.
    pub message: String,
    /// The offending token.
    pub token:   Token,
}

impl ParseError {
    /// Creates a parse error bound to `token`.
    #[must_use]
    pub fn new(message: impl Into<String>, token: &Token) -> Self {
        Self { message: message.into(),
               token:   token.clone(), }
    }

    /// Returns the source line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token.line
    }
}

fn location(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}
