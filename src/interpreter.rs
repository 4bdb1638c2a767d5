/// The lexer module defines tokens and their character-level patterns.
///
/// The token kinds are derived with `logos`. This module also defines the
/// `Token` struct handed from the scanner to the parser and stored in the
/// AST for error reporting.
///
/// # Responsibilities
/// - Classifies characters into punctuation, operators, literals,
///   identifiers and reserved words.
/// - Tracks the current line, including newlines inside string literals.
pub mod lexer;
/// The scanner module turns source text into a token sequence.
///
/// Wraps the lexer, attaches lines and literal values to tokens and collects
/// lexical errors without stopping.
pub mod scanner;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the scanner and
/// constructs the statements and expressions of a program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with the offending token.
/// - Recovers after an error so one run reports every independent mistake.
pub mod parser;
/// The environment module stores variables for nested scopes.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements, manages variable state through the environment and writes
/// `print` output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, blocks and control flow.
/// - Reports runtime errors such as operands of the wrong type.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
pub mod value;
