//! Immutable JSON document tree.
//!
//! The tree has four scalar leaf kinds (string, number, boolean, null) and three
//! container kinds (object, array, property). Nodes own their children and hold
//! no reference to their parent; ancestry is recovered by traversal (see
//! [`crate::lineage`]).
//!
//! Objects keep their properties in a `Vec`, so declaration order is the
//! traversal order and duplicate keys are representable. Text parsing is
//! delegated to `serde_json` (built with `preserve_order`, which keeps object
//! members in source order).
//!
//! `PartialEq` on these types is *structural*. Node identity, which is what
//! lineage lookups use, is provided by [`crate::node::Node::same`].

use std::fmt;

use serde_json::Number;

use crate::error::Result;

/// A JSON value: one scalar leaf or an object/array container.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Boolean(bool),
    Null,
    Object(ObjectValue),
    Array(ArrayValue),
}

/// An object: properties in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    properties: Vec<Property>,
}

/// An array: elements in index order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayValue {
    elements: Vec<Value>,
}

/// A key together with exactly one child value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    key: String,
    value: Value,
}

/// The closed set of node kinds in a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
    Property,
}

impl NodeKind {
    /// Objects, arrays and properties own children; everything else is a leaf.
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array | NodeKind::Property)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::Property => "property",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn number(value: impl Into<Number>) -> Self {
        Value::Number(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn null() -> Self {
        Value::Null
    }

    /// Parse JSON text into a tree.
    ///
    /// Parsing is done by `serde_json`; this only converts the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LineageError::JsonParse`] if `json` is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineage_core::Value;
    ///
    /// let root = Value::from_json_str(r#"{"a":[1,2]}"#).unwrap();
    /// let object = root.as_object().unwrap();
    /// assert_eq!(object.properties()[0].key(), "a");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(Value::from(value))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Value::String(_) => NodeKind::String,
            Value::Number(_) => NodeKind::Number,
            Value::Boolean(_) => NodeKind::Boolean,
            Value::Null => NodeKind::Null,
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl ObjectValue {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// First property named `key`, in declaration order.
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    /// Value of the first property named `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.property(key).map(Property::value)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl ArrayValue {
    pub fn new(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Property {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| Property::new(key, value))
                .collect(),
        )
    }
}

impl FromIterator<Property> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<Value> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(object)
    }
}

impl From<ArrayValue> for Value {
    fn from(array: ArrayValue) -> Self {
        Value::Array(array)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, child)| Property::new(key, Value::from(child)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}
