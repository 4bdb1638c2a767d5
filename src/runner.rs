use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    error::LoxError,
    interpreter::{
        evaluator::core::Interpreter, parser::core::Parser, scanner::Scanner, value::core::Value,
    },
};

/// Chains scanner, parser and interpreter over one long-lived interpreter.
///
/// Variables defined by one call are visible to the next, so a `Runner` can
/// back an interactive session as well as a single script run.
///
/// ## Usage
/// ```
/// use treelox::{interpreter::value::core::Value, runner::Runner};
///
/// let mut runner = Runner::new(Vec::new());
///
/// runner.run("var greeting = \"hi\";").unwrap();
/// runner.run("print greeting + \"!\";").unwrap();
/// assert_eq!(runner.run_line("1 + 2").unwrap(), Some(Value::Number(3.0)));
///
/// assert_eq!(runner.into_output(), b"hi!\n");
/// ```
pub struct Runner<W: Write> {
    interpreter: Interpreter<W>,
}

impl<W: Write> Runner<W> {
    /// Creates a runner whose programs print to `out`.
    pub fn new(out: W) -> Self {
        Self { interpreter: Interpreter::new(out) }
    }

    /// Returns the underlying interpreter.
    pub const fn interpreter(&self) -> &Interpreter<W> {
        &self.interpreter
    }

    /// Consumes the runner and returns its output sink.
    pub fn into_output(self) -> W {
        self.interpreter.into_output()
    }

    /// Scans, parses and executes a program.
    ///
    /// Nothing is parsed if scanning failed and nothing is executed if
    /// parsing failed, so a program with syntax errors has no side effects.
    ///
    /// # Returns
    /// The value of the last top-level expression statement, if any.
    ///
    /// # Errors
    /// - `LoxError::Lexical` with every lexical error.
    /// - `LoxError::Parse` with every syntax error.
    /// - `LoxError::Runtime` with the error that stopped execution.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, LoxError> {
        let tokens = Scanner::new(source).scan().into_result()?;
        let statements = Parser::new(&tokens).parse().into_result()?;

        Ok(self.interpreter.interpret(&statements)?)
    }

    /// Runs one line of interactive input.
    ///
    /// Behaves like [`Runner::run`], except that input which is not a valid
    /// program but is a single bare expression, such as `1 + 2` without a
    /// semicolon, is evaluated and its value returned.
    ///
    /// # Errors
    /// As for [`Runner::run`]. When the line is neither a program nor an
    /// expression, the errors reported are those of the program parse.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = line.len()))]
    pub fn run_line(&mut self, line: &str) -> Result<Option<Value>, LoxError> {
        let tokens = Scanner::new(line).scan().into_result()?;

        let errors = match Parser::new(&tokens).parse().into_result() {
            Ok(statements) => return Ok(self.interpreter.interpret(&statements)?),
            Err(errors) => errors,
        };

        if let Ok(expression) = Parser::new(&tokens).parse_expression() {
            debug!("evaluating bare expression");
            return Ok(Some(self.interpreter.evaluate(&expression)?));
        }

        Err(LoxError::Parse(errors))
    }

    /// Runs an interactive session over `input`, one [`Runner::run_line`]
    /// per line.
    ///
    /// Each line is preceded by a `> ` prompt on the output sink, and the
    /// value of a line that has one is echoed as `=> value`. Diagnostics go
    /// to `diagnostics` and the session carries on. Blank lines are skipped.
    /// End of input ends the session with a newline.
    ///
    /// # Errors
    /// The first I/O error reading `input` (including invalid UTF-8) or
    /// writing prompts, values and diagnostics.
    pub fn repl<R: BufRead, E: Write>(&mut self, input: R, mut diagnostics: E) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            let out = self.interpreter.output_mut();
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                return writeln!(self.interpreter.output_mut());
            };
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match self.run_line(&line) {
                Ok(Some(value)) => writeln!(self.interpreter.output_mut(), "=> {value}")?,
                Ok(None) => {},
                Err(e) => writeln!(diagnostics, "{e}")?,
            }
        }
    }
}
