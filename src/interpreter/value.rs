use std::fmt::Display;

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    /// An identifier with no binding, carried as its raw name.
    Name(String),
}

impl Value {
    /// Short description used in error messages, e.g. "number 3".
    pub fn describe(&self) -> String {
        match self {
            Value::Number(number) => format!("number {}", number),
            Value::Boolean(boolean) => format!("boolean {}", boolean),
            Value::Name(name) => format!("name `{}`", name),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Boolean(boolean) => write!(f, "{}", boolean),
            Value::Name(name) => write!(f, "{}", name),
        }
    }
}
