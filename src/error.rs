/// Scanning errors.
///
/// Defines the errors the scanner collects while turning source text into
/// tokens: unexpected characters and unterminated strings.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines the syntax error raised by the parser. It carries the message and
/// the offending token, so every report can name a line and a lexeme.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: operands of
/// the wrong type, undeclared variables and failures of the output sink.
pub mod runtime_error;

use std::fmt::Display;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Exit status for input that failed to scan or parse (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: i32 = 65;
/// Exit status for a script that failed while running (`EX_SOFTWARE`).
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// Any failure of the scan → parse → interpret pipeline.
///
/// Scanning and parsing report every error they find, so those variants hold
/// lists. Evaluation stops at the first error.
#[derive(Debug, Error)]
pub enum LoxError {
    /// The source contained lexical errors; nothing was parsed.
    #[error("{}", join_lines(.0))]
    Lexical(Vec<LexicalError>),
    /// The token stream contained syntax errors; nothing was executed.
    #[error("{}", join_lines(.0))]
    Parse(Vec<ParseError>),
    /// Execution stopped at a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl LoxError {
    /// Returns the process exit status a command-line front-end should use
    /// for this error.
    ///
    /// # Example
    /// ```
    /// use treelox::error::{EXIT_DATA_ERROR, LexicalError, LoxError};
    ///
    /// let error = LoxError::Lexical(vec![LexicalError::UnterminatedString { line: 1 }]);
    /// assert_eq!(error.exit_code(), EXIT_DATA_ERROR);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Lexical(_) | Self::Parse(_) => EXIT_DATA_ERROR,
            Self::Runtime(_) => EXIT_RUNTIME_ERROR,
        }
    }
}

impl From<Vec<LexicalError>> for LoxError {
    fn from(errors: Vec<LexicalError>) -> Self {
        Self::Lexical(errors)
    }
}

impl From<Vec<ParseError>> for LoxError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}

fn join_lines<T: Display>(errors: &[T]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
