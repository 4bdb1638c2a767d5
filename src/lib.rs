//! # treelox
//!
//! treelox is a tree-walking interpreter for Lox, a small dynamically-typed
//! scripting language. Source text goes through three stages: the scanner
//! turns it into tokens, the parser builds a syntax tree, and the
//! interpreter walks that tree with lexically scoped variables.
//!
//! ```
//! let mut out = Vec::new();
//! let result = treelox::run("var a = 5; print (2 + 3) * a; a * 2;", &mut out).unwrap();
//!
//! assert_eq!(out, b"25\n");
//! assert_eq!(result.unwrap().to_string(), "10");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{error::LoxError, interpreter::value::core::Value, runner::Runner};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps operator and name tokens on nodes for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error types for all failure modes (scanner, parser, evaluator).
/// - Aggregates them into `LoxError` for the pipeline entry points.
/// - Maps failures to process exit codes.
pub mod error;
/// Orchestrates the stages of code execution.
///
/// This module ties together lexing, scanning, parsing, variable storage,
/// evaluation and value representations.
pub mod interpreter;
/// Renders syntax trees as text for debugging.
pub mod printer;
/// Runs source text through the whole pipeline.
///
/// Keeps one interpreter alive across runs, which is what an interactive
/// session needs.
pub mod runner;

/// Runs a program with a fresh interpreter.
///
/// Scans, parses and executes all statements in `source`, writing `print`
/// output to `out`.
///
/// # Returns
/// The value of the last top-level expression statement, if there was one.
///
/// # Errors
/// Returns the lexical or syntax errors if the program is malformed, or the
/// runtime error that stopped execution.
///
/// # Examples
/// ```
/// use treelox::{error::LoxError, run};
///
/// // Runtime errors stop the program.
/// let error = run("print oops;", Vec::new()).unwrap_err();
/// assert!(matches!(error, LoxError::Runtime(_)));
/// assert_eq!(error.to_string(), "Error on line 1: Undefined variable 'oops'.");
///
/// // Scanning errors are reported before anything runs.
/// let error = run("print 1; #", Vec::new()).unwrap_err();
/// assert_eq!(error.to_string(), "Error on line 1: Unexpected character '#'.");
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<Option<Value>, LoxError> {
    Runner::new(out).run(source)
}
