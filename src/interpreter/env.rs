use std::collections::HashMap;

use crate::{error::EvalError, value::Number};

/// Insertion-ordered variable bindings for one execution run.
///
/// Names are unique. Re-assigning an existing variable overwrites its value
/// but keeps its original position, so the final snapshot lists variables in
/// first-assignment order. One environment is owned exclusively by one run
/// and is mutated only by the evaluator.
///
/// # Example
/// ```
/// use calcscript::{interpreter::env::Environment, value::Number};
///
/// let mut env = Environment::new();
/// env.set("b", Number::Integer(1));
/// env.set("a", Number::Integer(2));
/// env.set("b", Number::Integer(3));
///
/// let names: Vec<&str> = env.bindings().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["b", "a"]);
/// assert_eq!(env.get("b"), Ok(Number::Integer(3)));
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Number>,
    order: Vec<String>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable's current value.
    ///
    /// # Errors
    /// Returns [`EvalError::UndefinedVariable`] (`ENV_001`) when the name was
    /// never assigned.
    pub fn get(&self, name: &str) -> Result<Number, EvalError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Binds or overwrites a variable, preserving first-insertion order.
    pub fn set(&mut self, name: &str, value: Number) {
        if self.values.insert(name.to_string(), value).is_none() {
            self.order.push(name.to_string());
        }
    }

    /// Ordered `(name, value)` pairs for the final snapshot.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, Number)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|value| (name.as_str(), *value)))
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
