use std::io::Write;

use tracing::debug;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes statements and evaluates expressions by walking the tree.
///
/// The interpreter owns the variable [`Environment`] and the sink that
/// receives `print` output. It is created once and can be fed any number of
/// programs; global variables persist between [`Interpreter::interpret`]
/// calls, which is what a read-eval-print loop needs.
///
/// ## Usage
/// ```
/// use treelox::interpreter::{
///     evaluator::core::Interpreter,
///     parser::core::Parser,
///     scanner::Scanner,
/// };
///
/// let mut interpreter = Interpreter::new(Vec::new());
///
/// for source in ["var a = 20;", "print a + 5;"] {
///     let tokens = Scanner::new(source).scan().tokens;
///     let statements = Parser::new(&tokens).parse().statements;
///     interpreter.interpret(&statements).unwrap();
/// }
///
/// assert_eq!(interpreter.output(), b"25\n");
/// ```
pub struct Interpreter<W: Write> {
    environment: Environment,
    out:         W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope that prints to
    /// `out`.
    pub fn new(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// Returns the variable storage.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Returns the output sink for writing around program output.
    pub const fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes a program.
    ///
    /// Statements run in order against the persistent global scope.
    /// Execution stops at the first runtime error; output produced before it
    /// has already been written.
    ///
    /// # Returns
    /// The value of the last top-level expression statement, or `None` if
    /// the program had none.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<Option<Value>> {
        let mut last = None;

        for statement in statements {
            if let Some(value) = self.execute(statement)? {
                last = Some(value);
            }
        }

        debug!(result = ?last, "program finished");
        Ok(last)
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Some(Value)` for expression statements, whose value is otherwise
    /// discarded, and `None` for every other statement.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<Option<Value>> {
        match statement {
            Stmt::Expression { expression } => self.evaluate(expression).map(Some),
            Stmt::Print { expression } => {
                let value = self.evaluate(expression)?;
                writeln!(self.out, "{value}")?;
                Ok(None)
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                self.environment.define(name.lexeme.as_str(), value);
                Ok(None)
            },
            Stmt::Block { statements } => {
                self.execute_block(statements)?;
                Ok(None)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
                Ok(None)
            },
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(None)
            },
        }
    }

    /// Executes `statements` in a fresh scope enclosed by the current one.
    ///
    /// The scope is discarded when the block ends, also when one of its
    /// statements fails.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.environment.push_scope();

        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement).map(drop));

        self.environment.pop_scope();
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right, except where `and` and `or` skip the right
    /// operand.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// let value = interpreter.evaluate(&Expr::grouping(Expr::literal(4.0))).unwrap();
    ///
    /// assert_eq!(value, Value::Number(4.0));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { expression } => self.evaluate(expression),
            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                Self::eval_unary(operator, right)
            },
            Expr::Binary { left,
                           operator,
                           right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(operator, left, right)
            },
            Expr::Logical { left,
                            operator,
                            right, } => self.eval_logical(left, operator, right),
            Expr::Variable { name } => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
        }
    }
}
