//! Double-dispatch traversal over a document tree.
//!
//! Every node kind has one [`Visitor`] method. Nodes dispatch to the method
//! for their own kind through `accept`; container methods default to the
//! matching `walk_*` function, which visits the children in document order.
//! An overriding container method calls `walk_*` itself to keep descending.
//!
//! # Example
//!
//! ```
//! use lineage_core::visit::{walk_property, Visitor};
//! use lineage_core::{Property, Value};
//!
//! struct KeyCollector<'a> {
//!     keys: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for KeyCollector<'a> {
//!     fn visit_property(&mut self, property: &'a Property) {
//!         self.keys.push(property.key());
//!         walk_property(self, property);
//!     }
//! }
//!
//! let root = Value::from_json_str(r#"{"a":{"b":1},"c":[{"d":null}]}"#).unwrap();
//! let mut collector = KeyCollector { keys: Vec::new() };
//! root.accept(&mut collector);
//! assert_eq!(collector.keys, ["a", "b", "c", "d"]);
//! ```

use serde_json::Number;

use crate::document::{ArrayValue, ObjectValue, Property, Value};

/// One handler per node kind.
///
/// Leaf handlers receive the leaf's [`Value`] node (its identity) along with
/// its payload.
pub trait Visitor<'a> {
    fn visit_string(&mut self, _node: &'a Value, _value: &'a str) {}

    fn visit_number(&mut self, _node: &'a Value, _value: &'a Number) {}

    fn visit_boolean(&mut self, _node: &'a Value, _value: bool) {}

    fn visit_null(&mut self, _node: &'a Value) {}

    fn visit_object(&mut self, object: &'a ObjectValue) {
        walk_object(self, object)
    }

    fn visit_array(&mut self, array: &'a ArrayValue) {
        walk_array(self, array)
    }

    fn visit_property(&mut self, property: &'a Property) {
        walk_property(self, property)
    }
}

/// Visit each property of `object` in declaration order.
pub fn walk_object<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, object: &'a ObjectValue) {
    for property in object.properties() {
        visitor.visit_property(property);
    }
}

/// Visit each element of `array` in index order.
pub fn walk_array<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, array: &'a ArrayValue) {
    for element in array.elements() {
        element.accept(visitor);
    }
}

/// Visit the value of `property`.
pub fn walk_property<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, property: &'a Property) {
    property.value().accept(visitor);
}

impl Value {
    /// Dispatch to the visitor method matching this value's kind.
    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        match self {
            Value::String(s) => visitor.visit_string(self, s),
            Value::Number(n) => visitor.visit_number(self, n),
            Value::Boolean(b) => visitor.visit_boolean(self, *b),
            Value::Null => visitor.visit_null(self),
            Value::Object(object) => visitor.visit_object(object),
            Value::Array(array) => visitor.visit_array(array),
        }
    }
}

impl ObjectValue {
    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        visitor.visit_object(self)
    }
}

impl ArrayValue {
    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        visitor.visit_array(self)
    }
}

impl Property {
    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        visitor.visit_property(self)
    }
}
