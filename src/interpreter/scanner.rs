use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::LexicalError,
    interpreter::lexer::{Literal, ScanExtras, Token, TokenKind},
};

/// The product of a scan: every token that could be built plus every lexical
/// error found along the way, both in source order.
///
/// The token list always ends with exactly one [`TokenKind::Eof`] token, even
/// when errors were recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order, terminated by `Eof`.
    pub tokens: Vec<Token>,
    /// Lexical errors in source order.
    pub errors: Vec<LexicalError>,
}

impl ScanOutput {
    /// Returns `true` if at least one lexical error was recorded.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts the output into the token list, or the errors if there were
    /// any.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::scanner::Scanner;
    ///
    /// assert!(Scanner::new("var x = 1;").scan().into_result().is_ok());
    /// assert!(Scanner::new("var x = #;").scan().into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexicalError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Converts source text into a token sequence.
///
/// The scanner makes a single left-to-right pass. It never stops at an error:
/// unexpected characters and unterminated strings are recorded and scanning
/// continues with the next character.
///
/// Each token records the line the scanner had reached once its lexeme was
/// consumed, so a string spanning lines reports the line of its closing quote.
pub struct Scanner<'src> {
    source: &'src str,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Scans the whole source.
    ///
    /// # Returns
    /// A [`ScanOutput`] holding the tokens (always terminated by `Eof`) and
    /// any lexical errors.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{lexer::TokenKind, scanner::Scanner};
    ///
    /// let output = Scanner::new("print 1 + 2;").scan();
    /// let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    ///
    /// assert_eq!(kinds,
    ///            [TokenKind::Print,
    ///             TokenKind::Number,
    ///             TokenKind::Plus,
    ///             TokenKind::Number,
    ///             TokenKind::Semicolon,
    ///             TokenKind::Eof]);
    /// assert!(output.errors.is_empty());
    /// ```
    #[must_use]
    pub fn scan(self) -> ScanOutput {
        let mut lexer = TokenKind::lexer_with_extras(self.source, ScanExtras::default());
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(result) = lexer.next() {
            let line = lexer.extras.line;
            let lexeme = lexer.slice();

            let Ok(kind) = result else {
                if let Some(character) = lexeme.chars().next() {
                    errors.push(LexicalError::UnexpectedCharacter { character, line });
                }
                continue;
            };

            match kind {
                TokenKind::UnterminatedString => {
                    errors.push(LexicalError::UnterminatedString { line });
                },
                TokenKind::Number => {
                    // Digit runs always parse; overlong ones round to infinity.
                    let number = lexeme.parse().unwrap_or(f64::INFINITY);
                    tokens.push(Token::new(kind, line, lexeme, Some(Literal::Number(number))));
                },
                TokenKind::String => {
                    let contents = &lexeme[1..lexeme.len() - 1];
                    tokens.push(Token::new(kind,
                                           line,
                                           lexeme,
                                           Some(Literal::String(contents.to_string()))));
                },
                TokenKind::Comment | TokenKind::NewLine | TokenKind::Ignored | TokenKind::Eof => {},
                _ => tokens.push(Token::new(kind, line, lexeme, None)),
            }

            trace!(%kind, line, lexeme, "scanned token");
        }

        tokens.push(Token::eof(lexer.extras.line));

        debug!(tokens = tokens.len(), errors = errors.len(), "scan finished");

        ScanOutput { tokens, errors }
    }
}
