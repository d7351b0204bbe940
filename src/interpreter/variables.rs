use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Stores the values of all assigned variables.
///
/// Variables are created by their first assignment and are never removed.
/// A name is either bound to a value or absent; reading an absent name is
/// an error rather than a default.
///
/// ## Usage
///
/// A store is owned by a [`Calculator`](crate::interpreter::calculator::Calculator)
/// (or by any caller of [`crate::evaluate`]) and lent to one evaluation at a
/// time, so every assignment is visible to all later lines.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    values: HashMap<String, Value>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `position`: Byte offset of the read, used for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if the name was never assigned.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{value::core::Value, variables::VariableStore};
    ///
    /// let mut store = VariableStore::new();
    /// assert!(store.get("x", 0).is_err());
    ///
    /// store.set("x", Value::from(5_i64));
    /// assert_eq!(store.get("x", 0).unwrap(), Value::from(5_i64));
    /// ```
    pub fn get(&self, name: &str, position: usize) -> Result<Value, RuntimeError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           position })
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
