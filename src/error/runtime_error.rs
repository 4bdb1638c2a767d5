use std::io;

use thiserror::Error;

use crate::interpreter::{lexer::Token, value::core::Value};

/// Represents all errors that can occur during evaluation.
///
/// Each variant keeps the token that triggered it so the error can be
/// attributed to a source line. Evaluation stops at the first runtime error;
/// output written before it stays written.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An operator was applied to a value of the wrong type.
    #[error("Error on line {}: Invalid operand for '{}': {}.", .operator.line, .operator.lexeme, .value.inspect())]
    InvalidOperand {
        /// The operator token.
        operator: Token,
        /// The offending operand.
        value:    Value,
    },
    /// A variable was read or assigned without being declared.
    #[error("Error on line {}: Undefined variable '{}'.", .name.line, .name.lexeme)]
    UndefinedVariable {
        /// The variable name token.
        name: Token,
    },
    /// The output sink rejected a `print`.
    #[error("Failed to write program output: {0}")]
    Output(#[from] io::Error),
}

impl RuntimeError {
    /// Returns the source line of the error, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidOperand { operator: token, .. } | Self::UndefinedVariable { name: token } => {
                Some(token.line)
            },
            Self::Output(_) => None,
        }
    }
}
