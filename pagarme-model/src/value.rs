//! Loosely-typed field values.

use crate::model::Model;
use crate::schema::EnumTable;
use serde_json::Number;
use std::fmt;
use std::sync::Arc;

/// A member of a declared enum, written externally as its string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub table: &'static EnumTable,
    pub member: &'static str,
}

impl EnumValue {
    pub fn as_str(&self) -> &'static str {
        self.member
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.member)
    }
}

/// A field value held by a [`Model`].
///
/// Nested models are shared: cloning a value (or loading one model from
/// another) clones the `Arc`, not the nested model.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Enum(EnumValue),
    Model(Arc<Model>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// String contents, or the member name for enum values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Enum(e) => Some(e.member),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            Value::Enum(e) => Some(*e),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Arc<Model>> {
        match self {
            Value::Model(m) => Some(m),
            _ => None,
        }
    }

    /// Short description of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Enum(_) => "enum",
            Value::Model(_) => "model",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => write!(f, "array of {}", items.len()),
            Value::Enum(e) => write!(f, "{}::{}", e.table.name, e.member),
            Value::Model(m) => write!(f, "{} model", m.kind().discriminator()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

/// Non-finite floats have no JSON form and become null.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<EnumValue> for Value {
    fn from(e: EnumValue) -> Self {
        Value::Enum(e)
    }
}

impl From<Model> for Value {
    fn from(m: Model) -> Self {
        Value::Model(Arc::new(m))
    }
}

impl From<Arc<Model>> for Value {
    fn from(m: Arc<Model>) -> Self {
        Value::Model(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
