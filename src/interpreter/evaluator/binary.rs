/// Operator dispatch for binary expressions.
pub mod core;

/// Arithmetic operators and string concatenation.
pub mod scalar;

/// Ordering comparisons and equality.
pub mod comparison;

/// Short-circuiting `and` and `or`.
pub mod logic;
