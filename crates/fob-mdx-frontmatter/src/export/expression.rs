//! Literal JavaScript expressions built from JSON values

use serde_json::{Map, Number, Value};

use super::escape::{escape_js_string, is_valid_identifier};

/// A literal JavaScript expression
///
/// Only the shapes a JSON value can take are representable, so converting a
/// [`Value`] never fails and the result can always be turned back into the
/// same value with [`Expression::to_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `undefined`, bound to a configured name when no record was found
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Expression>),
    Object(Vec<Property>),
}

/// One `key: value` entry of an object expression
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expression,
}

/// How an object key is written
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    /// Bare identifier: `title: ...`
    Identifier(String),
    /// Quoted key: `"og:image": ...`
    String(String),
    /// Computed key, needed for `__proto__` so it stays an own property
    Computed(String),
}

impl PropertyKey {
    fn for_key(key: &str) -> Self {
        if key == "__proto__" {
            Self::Computed(key.to_string())
        } else if is_valid_identifier(key) {
            Self::Identifier(key.to_string())
        } else {
            Self::String(key.to_string())
        }
    }

    /// The key as it appears in the decoded record
    pub fn name(&self) -> &str {
        match self {
            Self::Identifier(name) | Self::String(name) | Self::Computed(name) => name,
        }
    }

    fn to_js(&self) -> String {
        match self {
            Self::Identifier(name) => name.clone(),
            Self::String(name) => format!("\"{}\"", escape_js_string(name)),
            Self::Computed(name) => format!("[\"{}\"]", escape_js_string(name)),
        }
    }
}

impl Expression {
    /// Convert a JSON value into a literal expression, recursing into
    /// arrays and objects. Object entries keep their iteration order.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::Array(items.iter().map(Self::from_value).collect()),
            Value::Object(object) => Self::Object(
                object
                    .iter()
                    .map(|(key, value)| Property {
                        key: PropertyKey::for_key(key),
                        value: Self::from_value(value),
                    })
                    .collect(),
            ),
        }
    }

    /// Evaluate the literal back into a JSON value
    ///
    /// `undefined` has no JSON form and evaluates to `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Undefined | Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_value).collect()),
            Self::Object(properties) => {
                let mut object = Map::with_capacity(properties.len());
                for property in properties {
                    object.insert(property.key.name().to_string(), property.value.to_value());
                }
                Value::Object(object)
            }
        }
    }

    /// Render as JavaScript source
    pub fn to_js(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => format!("\"{}\"", escape_js_string(s)),
            Self::Array(items) => {
                let elements: Vec<String> = items.iter().map(Self::to_js).collect();
                format!("[{}]", elements.join(", "))
            }
            Self::Object(properties) if properties.is_empty() => "{}".to_string(),
            Self::Object(properties) => {
                let entries: Vec<String> = properties
                    .iter()
                    .map(|p| format!("{}: {}", p.key.to_js(), p.value.to_js()))
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
        }
    }
}
