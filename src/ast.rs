use crate::interpreter::lexer::Token;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code: `nil`, booleans, numbers and strings. It is used in the AST for
/// literal expressions and converts directly into a runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` literal.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A number literal. All numbers are doubles.
    Number(f64),
    /// A string literal, without quotes.
    String(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node owns its children exclusively; trees are acyclic and never
/// mutated after the parser builds them. Operator and name tokens are kept so
/// runtime errors can point at a source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or `nil`).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        expression: Box<Self>,
    },
    /// A prefix operation: `-x` or `!x`.
    Unary {
        /// The operator token (`-` or `!`).
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:     Box<Self>,
        /// The `and` or `or` token.
        operator: Token,
        /// Right operand, evaluated only when the left does not decide.
        right:    Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment to an existing variable: `name = value`.
    Assign {
        /// The identifier token of the target.
        name:  Token,
        /// The assigned expression.
        value: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    ///
    /// ## Example
    /// ```
    /// use treelox::ast::{Expr, LiteralValue};
    ///
    /// let expr = Expr::literal(1.5);
    /// assert_eq!(expr, Expr::Literal { value: LiteralValue::Number(1.5) });
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds a grouping node around `expression`.
    #[must_use]
    pub fn grouping(expression: Self) -> Self {
        Self::Grouping { expression: Box::new(expression) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(operator: Token, right: Self) -> Self {
        Self::Unary { operator,
                      right: Box::new(right) }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds a logical node.
    #[must_use]
    pub fn logical(left: Self, operator: Token, right: Self) -> Self {
        Self::Logical { left: Box::new(left),
                        operator,
                        right: Box::new(right) }
    }
}

/// Represents a statement.
///
/// A program is an ordered sequence of statements. Statements own their
/// nested statements and expressions exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expression: Expr,
    },
    /// `print expression;`
    Print {
        /// The expression whose value is printed.
        expression: Expr,
    },
    /// A variable declaration using `var`.
    Var {
        /// The identifier token of the variable.
        name:        Token,
        /// The initial value; `nil` when absent.
        initializer: Option<Expr>,
    },
    /// A braced block introducing a new scope.
    Block {
        /// Statements inside the block, in order.
        statements: Vec<Self>,
    },
    /// `if (condition) then_branch else else_branch`
    If {
        /// The condition, tested for truthiness.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed when the condition is falsey, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while (condition) body`. `for` loops are desugared into this.
    While {
        /// Re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
}
