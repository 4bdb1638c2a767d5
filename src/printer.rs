use crate::ast::{Expr, LiteralValue, Stmt};

/// Renders syntax trees as text for debugging.
///
/// Two forms are available:
/// - [`AstPrinter::print_expr`] and [`AstPrinter::print_stmt`] write a
///   parenthesized prefix form that makes precedence explicit, e.g.
///   `(+ 1 (* 2 3))`.
/// - [`AstPrinter::to_source`] writes infix source text. For any tree the
///   parser can produce, parsing that text yields the same tree again.
pub struct AstPrinter;

impl AstPrinter {
    /// Renders an expression in prefix form.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     interpreter::{parser::core::Parser, scanner::Scanner},
    ///     printer::AstPrinter,
    /// };
    ///
    /// let tokens = Scanner::new("-1 + 2 * (3)").scan().tokens;
    /// let expr = Parser::new(&tokens).parse_expression().unwrap();
    ///
    /// assert_eq!(AstPrinter::print_expr(&expr), "(+ (- 1) (* 2 (group 3)))");
    /// ```
    #[must_use]
    pub fn print_expr(expr: &Expr) -> String {
        match expr {
            Expr::Literal { value } => literal(value),
            Expr::Grouping { expression } => parenthesize("group", &[expression.as_ref()]),
            Expr::Unary { operator, right } => parenthesize(&operator.lexeme, &[right.as_ref()]),
            Expr::Binary { left,
                           operator,
                           right, }
            | Expr::Logical { left,
                              operator,
                              right, } => {
                parenthesize(&operator.lexeme, &[left.as_ref(), right.as_ref()])
            },
            Expr::Variable { name } => name.lexeme.clone(),
            Expr::Assign { name, value } => {
                format!("({} = {})", name.lexeme, Self::print_expr(value))
            },
        }
    }

    /// Renders a statement in prefix form.
    ///
    /// Blocks are written as `{ ... }` with their statements separated by
    /// spaces.
    #[must_use]
    pub fn print_stmt(stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression { expression } => parenthesize("expr", &[expression]),
            Stmt::Print { expression } => parenthesize("print", &[expression]),
            Stmt::Var { name, initializer } => match initializer {
                Some(init) => format!("(var {} = {})", name.lexeme, Self::print_expr(init)),
                None => format!("(var {})", name.lexeme),
            },
            Stmt::Block { statements } => {
                let inner = statements.iter()
                                      .map(Self::print_stmt)
                                      .collect::<Vec<_>>()
                                      .join(" ");
                if inner.is_empty() {
                    "{ }".to_string()
                } else {
                    format!("{{ {inner} }}")
                }
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                let mut out = format!("(if {} {}",
                                      Self::print_expr(condition),
                                      Self::print_stmt(then_branch));
                if let Some(else_branch) = else_branch {
                    out.push(' ');
                    out.push_str(&Self::print_stmt(else_branch));
                }
                out.push(')');
                out
            },
            Stmt::While { condition, body } => {
                format!("(while {} {})",
                        Self::print_expr(condition),
                        Self::print_stmt(body))
            },
        }
    }

    /// Renders an expression as infix source text.
    ///
    /// No parentheses are added beyond the tree's own `Grouping` nodes, so
    /// the text re-parses to the same tree exactly when the tree is one the
    /// parser could have built. A negative number literal, which the parser
    /// never produces, comes back as a negation.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     interpreter::{parser::core::Parser, scanner::Scanner},
    ///     printer::AstPrinter,
    /// };
    ///
    /// let tokens = Scanner::new("!(a == \"x\") or b").scan().tokens;
    /// let expr = Parser::new(&tokens).parse_expression().unwrap();
    ///
    /// assert_eq!(AstPrinter::to_source(&expr), "!(a == \"x\") or b");
    /// ```
    #[must_use]
    pub fn to_source(expr: &Expr) -> String {
        match expr {
            Expr::Literal { value: LiteralValue::String(s) } => format!("\"{s}\""),
            Expr::Literal { value } => literal(value),
            Expr::Grouping { expression } => format!("({})", Self::to_source(expression)),
            Expr::Unary { operator, right } => {
                format!("{}{}", operator.lexeme, Self::to_source(right))
            },
            Expr::Binary { left,
                           operator,
                           right, }
            | Expr::Logical { left,
                              operator,
                              right, } => format!("{} {} {}",
                                                  Self::to_source(left),
                                                  operator.lexeme,
                                                  Self::to_source(right)),
            Expr::Variable { name } => name.lexeme.clone(),
            Expr::Assign { name, value } => format!("{} = {}", name.lexeme, Self::to_source(value)),
        }
    }
}

fn literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Nil => "nil".to_string(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Number(n) => n.to_string(),
        LiteralValue::String(s) => s.clone(),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = format!("({name}");
    for expr in exprs {
        out.push(' ');
        out.push_str(&AstPrinter::print_expr(expr));
    }
    out.push(')');
    out
}
