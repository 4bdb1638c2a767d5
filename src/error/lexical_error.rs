use thiserror::Error;

/// Represents all errors that can occur while scanning source text.
///
/// Lexical errors never stop the scanner. They are collected in source order
/// next to the best-effort token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// A character that cannot start any token.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal that is still open at the end of input.
    #[error("Error on line {line}: Unterminated string.")]
    UnterminatedString {
        /// The line the scanner reached at the end of input.
        line: usize,
    },
}

impl LexicalError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}
