use std::fmt;

use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Values are produced by evaluating expressions and stored in the
/// environment by `var` declarations and assignments. The language is
/// dynamically typed, so every operator checks the variants it receives.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value. Uninitialized variables hold `nil`.
    Nil,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators, equality and `!`.
    Bool(bool),
    /// A numeric value (double precision floating-point). The language has no
    /// separate integer type.
    Number(f64),
    /// A string value.
    String(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `nil` and `false` are falsey. Everything else is truthy, including `0`
    /// and the empty string.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the number held by the value, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Renders the value for diagnostics.
    ///
    /// Same as the `Display` form, except that strings are quoted so an empty
    /// string or one containing spaces is still visible in an error message.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("hi").inspect(), "\"hi\"");
    /// assert_eq!(Value::Nil.inspect(), "nil");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::String(s) => format!("\"{s}\""),
            _ => self.to_string(),
        }
    }
}

/// Numbers with an integral value print without a fractional part (`25`,
/// `-3`); other numbers use the shortest form that round-trips (`2.5`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

