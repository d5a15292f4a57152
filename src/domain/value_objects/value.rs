//! Configuration value
//!
//! Everything read from a config file is text. A value is either a single
//! scalar or an ordered list of scalars (`key[] = ...` lines). Typed access
//! goes through the coercion helpers below.

use std::fmt;

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// `key = value`
    Scalar(String),
    /// `key[] = a`, `key[] = b`, ...
    List(Vec<String>),
}

impl Value {
    /// Create a scalar value
    pub fn scalar(value: impl Into<String>) -> Self {
        Value::Scalar(value.into())
    }

    /// Create a list value
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Scalar text, `None` for lists
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// List entries; a scalar is treated as a one-element list.
    pub fn as_list(&self) -> Vec<String> {
        match self {
            Value::Scalar(s) => vec![s.clone()],
            Value::List(items) => items.clone(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_str().and_then(|s| s.trim().parse().ok())
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_str().and_then(|s| s.trim().parse().ok())
    }

    /// Boolean reading of a scalar.
    ///
    /// Accepts `1/true/on/yes` and `0/false/off/no/""` (case-insensitive).
    pub fn as_bool(&self) -> Option<bool> {
        let s = self.as_str()?.trim().to_ascii_lowercase();
        match s.as_str() {
            "1" | "true" | "on" | "yes" => Some(true),
            "0" | "false" | "off" | "no" | "" => Some(false),
            _ => None,
        }
    }

    /// Canonical text used by the comparison rule.
    ///
    /// Scalars are their own text; lists are their JSON array encoding, so
    /// two lists are equal only when every entry and the order match.
    pub fn canonical(&self) -> String {
        match self {
            Value::Scalar(s) => s.clone(),
            Value::List(items) => {
                serde_json::to_string(items).unwrap_or_else(|_| format!("{items:?}"))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(if b { "1" } else { "0" }.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::list(items)
    }
}
