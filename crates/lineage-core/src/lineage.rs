//! Lineage resolution: the container ancestors of a node.
//!
//! The tree has no parent pointers, so ancestry is rebuilt per query by a
//! depth-first, pre-order walk that keeps an explicit stack of the containers
//! it is currently inside. When the walk reaches the target (compared by
//! identity, see [`Node::same`]) the stack is copied out and every later
//! handler call becomes a no-op.

use std::ops::Deref;

use serde_json::Number;

use crate::document::{ArrayValue, ObjectValue, Property, Value};
use crate::node::{Container, Node};
use crate::visit::{walk_array, walk_object, walk_property, Visitor};

/// Containers from the root down to, but excluding, a target node.
///
/// The first element is the root (when the root is a container and not the
/// target itself); the last is the target's immediate container.
#[derive(Debug, Clone, Default)]
pub struct Lineage<'a> {
    containers: Vec<Container<'a>>,
}

impl<'a> Lineage<'a> {
    pub fn containers(&self) -> &[Container<'a>] {
        &self.containers
    }

    /// The target's immediate container, or `None` if the target is the root.
    pub fn parent(&self) -> Option<Container<'a>> {
        self.containers.last().copied()
    }

    /// The closest ancestor that is a property, i.e. the property whose value
    /// (directly or through nested containers) holds the target.
    pub fn enclosing_property(&self) -> Option<&'a Property> {
        self.containers.iter().rev().find_map(|c| c.as_property())
    }

    /// Identity comparison, element by element.
    pub fn same(&self, other: &Lineage<'_>) -> bool {
        self.containers.len() == other.containers.len()
            && self
                .containers
                .iter()
                .zip(&other.containers)
                .all(|(a, b)| a.same(*b))
    }

    pub fn into_vec(self) -> Vec<Container<'a>> {
        self.containers
    }
}

impl<'a> Deref for Lineage<'a> {
    type Target = [Container<'a>];

    fn deref(&self) -> &Self::Target {
        &self.containers
    }
}

impl<'a> IntoIterator for Lineage<'a> {
    type Item = Container<'a>;
    type IntoIter = std::vec::IntoIter<Container<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.containers.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l Lineage<'a> {
    type Item = &'l Container<'a>;
    type IntoIter = std::slice::Iter<'l, Container<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.containers.iter()
    }
}

/// Find the container ancestors of `target` inside the tree rooted at `root`.
///
/// Returns `Some(lineage)` if `target` is a node of the tree (an empty lineage
/// if it is the root itself) and `None` otherwise. Nodes are compared by
/// identity: a structurally equal node that is not part of this tree is never
/// found.
///
/// # Examples
///
/// ```
/// use lineage_core::{find_lineage, NodeKind, Value};
///
/// let root = Value::from_json_str(r#"{"a":{"b":1},"c":[2,3]}"#).unwrap();
/// let object = root.as_object().unwrap();
/// let array = object.get("c").unwrap();
///
/// let lineage = find_lineage(&root, array).unwrap();
/// let kinds: Vec<NodeKind> = lineage.iter().map(|c| c.kind()).collect();
/// assert_eq!(kinds, [NodeKind::Object, NodeKind::Property]);
///
/// let stranger = Value::from_json_str("[2,3]").unwrap();
/// assert!(find_lineage(&root, &stranger).is_none());
/// ```
pub fn find_lineage<'a, 't>(
    root: impl Into<Node<'a>>,
    target: impl Into<Node<'t>>,
) -> Option<Lineage<'a>> {
    let mut visitor = LineageVisitor::new(target.into());
    root.into().accept(&mut visitor);
    let found = visitor.finish();
    tracing::trace!(
        found = found.is_some(),
        depth = found.as_ref().map(|l| l.len()),
        "lineage query"
    );
    found
}

/// Per-query traversal state: the ancestor stack and the found slot.
struct LineageVisitor<'a, 't> {
    target: Node<'t>,
    ancestors: Vec<Container<'a>>,
    found: Option<Vec<Container<'a>>>,
}

impl<'a, 't> LineageVisitor<'a, 't> {
    fn new(target: Node<'t>) -> Self {
        Self {
            target,
            ancestors: Vec::new(),
            found: None,
        }
    }

    fn finish(self) -> Option<Lineage<'a>> {
        debug_assert!(self.ancestors.is_empty());
        self.found.map(|containers| Lineage { containers })
    }

    fn record(&mut self) {
        self.found = Some(self.ancestors.clone());
    }

    fn visit_leaf(&mut self, node: &'a Value) {
        if self.found.is_none() && self.target.same(Node::Leaf(node)) {
            self.record();
        }
    }

    /// Guard for every container handler. Returns true if the walk should
    /// descend, in which case the container is now on the ancestor stack and
    /// the caller must `exit` after walking it.
    fn enter(&mut self, container: Container<'a>) -> bool {
        if self.found.is_some() {
            return false;
        }
        if self.target.same(Node::from(container)) {
            self.record();
            return false;
        }
        self.ancestors.push(container);
        true
    }

    fn exit(&mut self) {
        self.ancestors.pop();
    }
}

impl<'a> Visitor<'a> for LineageVisitor<'a, '_> {
    fn visit_string(&mut self, node: &'a Value, _value: &'a str) {
        self.visit_leaf(node);
    }

    fn visit_number(&mut self, node: &'a Value, _value: &'a Number) {
        self.visit_leaf(node);
    }

    fn visit_boolean(&mut self, node: &'a Value, _value: bool) {
        self.visit_leaf(node);
    }

    fn visit_null(&mut self, node: &'a Value) {
        self.visit_leaf(node);
    }

    fn visit_object(&mut self, object: &'a ObjectValue) {
        if self.enter(Container::Object(object)) {
            walk_object(self, object);
            self.exit();
        }
    }

    fn visit_array(&mut self, array: &'a ArrayValue) {
        if self.enter(Container::Array(array)) {
            walk_array(self, array);
            self.exit();
        }
    }

    fn visit_property(&mut self, property: &'a Property) {
        if self.enter(Container::Property(property)) {
            walk_property(self, property);
            self.exit();
        }
    }
}
