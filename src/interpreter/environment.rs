use std::collections::HashMap;

use super::value::Value;

/// Name to value bindings made by `Set` statements.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Binds `name`, replacing any previous value.
    pub fn bind(&mut self, name: String, value: Value) {
        self.variables.insert(name, value);
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn bindings(&self) -> &HashMap<String, Value> {
        &self.variables
    }
}
