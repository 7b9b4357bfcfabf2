//! Borrowed node references and identity comparison.
//!
//! A [`Node`] points at one node inside a tree: a leaf [`Value`], an
//! [`ObjectValue`], an [`ArrayValue`] or a [`Property`]. Two nodes are the
//! *same* node only if they are the same kind and live at the same address.
//! Content is never compared, so two equal leaves at different positions in a
//! tree (or a clone of a subtree) are different nodes.

use std::ptr;

use crate::document::{ArrayValue, NodeKind, ObjectValue, Property, Value};
use crate::visit::Visitor;

/// A reference to any node in a document tree.
///
/// `Node::from(&Value)` maps object and array values to the
/// [`Node::Object`] / [`Node::Array`] variants. A `Leaf` built by hand around
/// an object or array value is normalised the same way before comparison.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Leaf(&'a Value),
    Object(&'a ObjectValue),
    Array(&'a ArrayValue),
    Property(&'a Property),
}

/// A reference to a node that can own children. Lineages are made of these.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    Object(&'a ObjectValue),
    Array(&'a ArrayValue),
    Property(&'a Property),
}

#[derive(PartialEq, Eq)]
enum Identity {
    Leaf(*const Value),
    Object(*const ObjectValue),
    Array(*const ArrayValue),
    Property(*const Property),
}

impl<'a> Node<'a> {
    fn identity(self) -> Identity {
        match self {
            Node::Leaf(Value::Object(object)) => Identity::Object(ptr::from_ref(object)),
            Node::Leaf(Value::Array(array)) => Identity::Array(ptr::from_ref(array)),
            Node::Leaf(value) => Identity::Leaf(ptr::from_ref(value)),
            Node::Object(object) => Identity::Object(ptr::from_ref(object)),
            Node::Array(array) => Identity::Array(ptr::from_ref(array)),
            Node::Property(property) => Identity::Property(ptr::from_ref(property)),
        }
    }

    /// Identity comparison: true only if both refer to the very same node.
    pub fn same(self, other: Node<'_>) -> bool {
        self.identity() == other.identity()
    }

    pub fn kind(self) -> NodeKind {
        match self {
            Node::Leaf(value) => value.kind(),
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
            Node::Property(_) => NodeKind::Property,
        }
    }

    /// The container view of this node, or `None` for a leaf.
    pub fn as_container(self) -> Option<Container<'a>> {
        match self {
            Node::Leaf(Value::Object(object)) => Some(Container::Object(object)),
            Node::Leaf(Value::Array(array)) => Some(Container::Array(array)),
            Node::Leaf(_) => None,
            Node::Object(object) => Some(Container::Object(object)),
            Node::Array(array) => Some(Container::Array(array)),
            Node::Property(property) => Some(Container::Property(property)),
        }
    }

    /// Dispatch to the visitor method matching this node's kind.
    pub fn accept<V: Visitor<'a> + ?Sized>(self, visitor: &mut V) {
        match self {
            Node::Leaf(value) => value.accept(visitor),
            Node::Object(object) => visitor.visit_object(object),
            Node::Array(array) => visitor.visit_array(array),
            Node::Property(property) => visitor.visit_property(property),
        }
    }
}

impl<'a> Container<'a> {
    pub fn same<'b>(self, other: impl Into<Node<'b>>) -> bool {
        Node::from(self).same(other.into())
    }

    pub fn kind(self) -> NodeKind {
        Node::from(self).kind()
    }

    pub fn as_object(self) -> Option<&'a ObjectValue> {
        match self {
            Container::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(self) -> Option<&'a ArrayValue> {
        match self {
            Container::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_property(self) -> Option<&'a Property> {
        match self {
            Container::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn accept<V: Visitor<'a> + ?Sized>(self, visitor: &mut V) {
        Node::from(self).accept(visitor)
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(object) => Node::Object(object),
            Value::Array(array) => Node::Array(array),
            leaf => Node::Leaf(leaf),
        }
    }
}

impl<'a> From<&'a ObjectValue> for Node<'a> {
    fn from(object: &'a ObjectValue) -> Self {
        Node::Object(object)
    }
}

impl<'a> From<&'a ArrayValue> for Node<'a> {
    fn from(array: &'a ArrayValue) -> Self {
        Node::Array(array)
    }
}

impl<'a> From<&'a Property> for Node<'a> {
    fn from(property: &'a Property) -> Self {
        Node::Property(property)
    }
}

impl<'a> From<Container<'a>> for Node<'a> {
    fn from(container: Container<'a>) -> Self {
        match container {
            Container::Object(object) => Node::Object(object),
            Container::Array(array) => Node::Array(array),
            Container::Property(property) => Node::Property(property),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_wrapping_an_object_is_the_same_as_the_object() {
        let value = Value::Object(ObjectValue::default());
        let object = value.as_object().unwrap();
        assert!(Node::Leaf(&value).same(Node::Object(object)));
        assert!(Node::from(&value).same(Node::Object(object)));
    }

    #[test]
    fn property_and_its_value_are_different_nodes() {
        let property = Property::new("k", Value::Null);
        assert!(!Node::from(&property).same(Node::from(property.value())));
    }

    #[test]
    fn clones_are_different_nodes() {
        let a = Value::number(0);
        let b = a.clone();
        assert_eq!(a, b);
        assert!(!Node::from(&a).same(Node::from(&b)));
        assert!(Node::from(&a).same(Node::from(&a)));
    }

    #[test]
    fn only_leaves_have_no_container_view() {
        let value = Value::from_json_str(r#"{"a":[1]}"#).unwrap();
        let property = value.as_object().unwrap().property("a").unwrap();
        let one = property.value().as_array().unwrap().get(0).unwrap();

        assert!(Node::from(&value).as_container().unwrap().as_object().is_some());
        assert!(Node::Leaf(property.value()).as_container().unwrap().as_array().is_some());
        assert!(Node::from(property).as_container().unwrap().as_property().is_some());
        assert!(Node::from(one).as_container().is_none());
        assert_eq!(Node::from(one).kind(), NodeKind::Number);
    }
}
