/// Parser state, entry points and error recovery.
///
/// Defines the `Parser` struct, its outputs and the synchronization routine
/// that lets one parse report every independent syntax error.
pub mod core;

/// Token cursor helpers.
///
/// Pure movement and matching operations over the immutable token slice.
pub mod cursor;

/// Statement parsing.
///
/// Handles declarations, `print`, `if`, `while`, expression statements and
/// the desugaring of `for` loops into `while` loops.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement lists, recovering from errors inside the
/// block without abandoning it.
pub mod block;

/// Binary operator parsing.
///
/// Implements the precedence levels from assignment down to factor. All
/// binary levels are left-associative; assignment is right-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, variable references and grouping.
pub mod unary;
