//! Flat binding environment for the slisp evaluator.

use crate::builtins::{self, Procedure};
use slisp_types::{EvalResult, Expression, InterpreterSemanticError, SemanticErrorKind};
use std::collections::BTreeMap;
use tracing::debug;

/// What a name is bound to.
#[derive(Debug, Clone)]
pub enum Binding {
    Value(Expression),
    Procedure(Procedure),
}

/// A single flat scope mapping names to bindings.
///
/// Built-ins are bound at construction and can never be replaced or
/// removed. `define` adds or overwrites user bindings; `reset` drops them.
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: BTreeMap<String, Binding>,
}

impl Environment {
    /// Create an environment holding exactly the built-in bindings.
    pub fn new() -> Self {
        let mut bindings = BTreeMap::new();
        for procedure in builtins::PROCEDURES {
            bindings.insert(procedure.name.to_string(), Binding::Procedure(*procedure));
        }
        for (name, value) in builtins::constants() {
            bindings.insert(name.to_string(), Binding::Value(value));
        }
        Self { bindings }
    }

    /// Drop every user binding, restoring the built-in set.
    pub fn reset(&mut self) {
        debug!(
            dropped = self.bindings.len() - Self::builtin_count(),
            "resetting environment"
        );
        *self = Self::new();
    }

    fn builtin_count() -> usize {
        builtins::PROCEDURES.len() + builtins::constants().len()
    }

    /// `true` if `name` has any binding, built-in or user-defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// `true` if `name` is one of the built-in procedures or constants.
    pub fn is_builtin(&self, name: &str) -> bool {
        builtins::PROCEDURES.iter().any(|p| p.name == name)
            || builtins::constants().iter().any(|(n, _)| *n == name)
    }

    /// Bind `name` to `value`, overwriting any earlier user binding.
    pub fn define(&mut self, name: &str, value: Expression) -> EvalResult<()> {
        if self.is_builtin(name) {
            return Err(InterpreterSemanticError::new(
                SemanticErrorKind::Redefinition,
                format!("cannot redefine built-in '{name}'"),
            ));
        }
        self.bindings.insert(name.to_string(), Binding::Value(value));
        Ok(())
    }

    /// Look up the value bound to `name`.
    ///
    /// A procedure name is not a value, so looking one up fails the same way
    /// an unbound name does.
    pub fn lookup(&self, name: &str) -> EvalResult<Expression> {
        match self.bindings.get(name) {
            Some(Binding::Value(value)) => Ok(value.clone()),
            Some(Binding::Procedure(_)) => Err(InterpreterSemanticError::new(
                SemanticErrorKind::UnboundSymbol,
                format!("procedure '{name}' cannot be used as a value"),
            )),
            None => Err(InterpreterSemanticError::new(
                SemanticErrorKind::UnboundSymbol,
                format!("unbound symbol '{name}'"),
            )),
        }
    }

    /// The procedure bound to `name`, if any.
    pub fn procedure(&self, name: &str) -> Option<&Procedure> {
        match self.bindings.get(name) {
            Some(Binding::Procedure(p)) => Some(p),
            _ => None,
        }
    }

    /// Names of all user-defined bindings, in sorted order.
    pub fn user_names(&self) -> Vec<&str> {
        self.bindings
            .keys()
            .map(String::as_str)
            .filter(|name| !self.is_builtin(name))
            .collect()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_present() {
        let env = Environment::new();
        for name in ["+", "-", "*", "/", "<", "not", "and", "or", "log10", "pow", "point", "pi"] {
            assert!(env.is_defined(name), "'{name}' should be bound");
        }
        assert!(env.user_names().is_empty());
    }

    #[test]
    fn test_define_and_lookup() {
        let mut env = Environment::new();
        env.define("x", 5.0.into()).unwrap();
        assert_eq!(env.lookup("x").unwrap(), Expression::from(5.0));
        env.define("x", 6.0.into()).unwrap();
        assert_eq!(env.lookup("x").unwrap(), Expression::from(6.0));
        assert_eq!(env.user_names(), ["x"]);
    }

    #[test]
    fn test_builtins_cannot_be_redefined() {
        let mut env = Environment::new();
        let err = env.define("+", 10.0.into()).unwrap_err();
        assert_eq!(err.kind, SemanticErrorKind::Redefinition);
        let err = env.define("pi", 3.0.into()).unwrap_err();
        assert_eq!(err.kind, SemanticErrorKind::Redefinition);
        assert!(env.procedure("+").is_some());
    }

    #[test]
    fn test_lookup_failures() {
        let env = Environment::new();
        assert_eq!(env.lookup("nope").unwrap_err().kind, SemanticErrorKind::UnboundSymbol);
        assert_eq!(env.lookup("+").unwrap_err().kind, SemanticErrorKind::UnboundSymbol);
        assert!(env.lookup("pi").is_ok());
    }

    #[test]
    fn test_reset_restores_builtins() {
        let mut env = Environment::new();
        env.define("x", 1.0.into()).unwrap();
        env.reset();
        assert!(!env.is_defined("x"));
        assert!(env.is_defined("+"));
        assert!(env.is_defined("pi"));
    }
}
