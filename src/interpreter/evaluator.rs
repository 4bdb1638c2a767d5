/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` struct, statement execution, expression
/// dispatch and block scoping.
pub mod core;

/// Unary operator evaluation.
///
/// Implements numeric negation and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Handles arithmetic, string concatenation, comparisons, equality and the
/// short-circuiting logical operators.
pub mod binary;
