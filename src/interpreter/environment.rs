use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
};

/// Index of a scope inside an [`Environment`].
///
/// A scope refers to its parent by id rather than by pointer; the arena owns
/// every scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope. It lives as long as the environment.
    pub const ROOT: Self = Self(0);
}

#[derive(Debug, Default)]
struct Scope {
    values:    HashMap<String, Value>,
    enclosing: Option<ScopeId>,
}

/// Variable storage for nested lexical scopes.
///
/// Scopes are kept in an arena. Entering a block pushes a child of the
/// current scope, leaving it pops that child again, so the live scopes always
/// form a single chain from the innermost block out to [`ScopeId::ROOT`].
/// Lookup and assignment walk that chain outward.
///
/// # Example
/// ```
/// use treelox::interpreter::{
///     environment::Environment,
///     lexer::{Token, TokenKind},
///     value::core::Value,
/// };
///
/// let name = Token::new(TokenKind::Identifier, 1, "a", None);
/// let mut env = Environment::new();
///
/// env.define("a", Value::Number(1.0));
/// env.push_scope();
/// env.define("a", Value::Number(2.0));
/// assert_eq!(env.get(&name).unwrap(), Value::Number(2.0));
/// env.pop_scope();
/// assert_eq!(env.get(&name).unwrap(), Value::Number(1.0));
/// ```
#[derive(Debug)]
pub struct Environment {
    scopes:  Vec<Scope>,
    current: ScopeId,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  vec![Scope::default()],
               current: ScopeId::ROOT, }
    }

    /// Returns the id of the innermost live scope.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Returns the number of live scopes, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Enters a new scope enclosed by the current one.
    pub fn push_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { values:    HashMap::new(),
                                 enclosing: Some(self.current), });
        self.current = id;
        trace!(depth = self.scopes.len(), "pushed scope");
        id
    }

    /// Leaves the current scope, discarding its bindings.
    ///
    /// The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.current == ScopeId::ROOT {
            return;
        }

        if let Some(scope) = self.scopes.pop() {
            self.current = scope.enclosing.unwrap_or(ScopeId::ROOT);
        }
        trace!(depth = self.scopes.len(), "popped scope");
    }

    /// Binds `name` in the current scope.
    ///
    /// Redefining a name in the same scope overwrites it; defining it in an
    /// inner scope shadows the outer binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        let ScopeId(index) = self.current;
        self.scopes[index].values.insert(name.into(), value);
    }

    /// Looks up the nearest binding of `name`.
    ///
    /// # Errors
    /// `UndefinedVariable` if no live scope binds the name.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.resolve(&name.lexeme)
            .and_then(|ScopeId(index)| self.scopes[index].values.get(&name.lexeme))
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Assignment never creates a binding.
    ///
    /// # Errors
    /// `UndefinedVariable` if no live scope binds the name.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        let ScopeId(index) =
            self.resolve(&name.lexeme)
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })?;
        self.scopes[index].values.insert(name.lexeme.clone(), value);
        Ok(())
    }

    fn resolve(&self, name: &str) -> Option<ScopeId> {
        let mut scope = Some(self.current);

        while let Some(id @ ScopeId(index)) = scope {
            let current = &self.scopes[index];
            if current.values.contains_key(name) {
                return Some(id);
            }
            scope = current.enclosing;
        }

        None
    }
}
