//! Node counts and nesting depth of a document tree.

use serde_json::Number;

use crate::document::{ArrayValue, NodeKind, ObjectValue, Property, Value};
use crate::node::Node;
use crate::visit::{walk_array, walk_object, walk_property, Visitor};

/// Per-kind node counts plus the deepest lineage length found in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub strings: usize,
    pub numbers: usize,
    pub booleans: usize,
    pub nulls: usize,
    pub objects: usize,
    pub arrays: usize,
    pub properties: usize,
    /// Longest lineage of any node, i.e. the maximum number of containers
    /// enclosing a single node.
    pub max_depth: usize,
}

impl TreeStats {
    /// Walk the tree rooted at `root` and count its nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineage_core::{TreeStats, Value};
    ///
    /// let root = Value::from_json_str(r#"{"a":[1,null]}"#).unwrap();
    /// let stats = TreeStats::collect(&root);
    /// assert_eq!(stats.total(), 5);
    /// assert_eq!(stats.max_depth, 3);
    /// ```
    pub fn collect<'a>(root: impl Into<Node<'a>>) -> Self {
        let mut counter = StatsVisitor::default();
        root.into().accept(&mut counter);
        counter.stats
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        match kind {
            NodeKind::String => self.strings,
            NodeKind::Number => self.numbers,
            NodeKind::Boolean => self.booleans,
            NodeKind::Null => self.nulls,
            NodeKind::Object => self.objects,
            NodeKind::Array => self.arrays,
            NodeKind::Property => self.properties,
        }
    }

    pub fn total(&self) -> usize {
        self.strings
            + self.numbers
            + self.booleans
            + self.nulls
            + self.objects
            + self.arrays
            + self.properties
    }

    pub fn containers(&self) -> usize {
        self.objects + self.arrays + self.properties
    }
}

#[derive(Default)]
struct StatsVisitor {
    stats: TreeStats,
    depth: usize,
}

impl StatsVisitor {
    fn leaf(&mut self) {
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
    }

    fn enter(&mut self) {
        self.leaf();
        self.depth += 1;
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }
}

impl<'a> Visitor<'a> for StatsVisitor {
    fn visit_string(&mut self, _node: &'a Value, _value: &'a str) {
        self.stats.strings += 1;
        self.leaf();
    }

    fn visit_number(&mut self, _node: &'a Value, _value: &'a Number) {
        self.stats.numbers += 1;
        self.leaf();
    }

    fn visit_boolean(&mut self, _node: &'a Value, _value: bool) {
        self.stats.booleans += 1;
        self.leaf();
    }

    fn visit_null(&mut self, _node: &'a Value) {
        self.stats.nulls += 1;
        self.leaf();
    }

    fn visit_object(&mut self, object: &'a ObjectValue) {
        self.stats.objects += 1;
        self.enter();
        walk_object(self, object);
        self.exit();
    }

    fn visit_array(&mut self, array: &'a ArrayValue) {
        self.stats.arrays += 1;
        self.enter();
        walk_array(self, array);
        self.exit();
    }

    fn visit_property(&mut self, property: &'a Property) {
        self.stats.properties += 1;
        self.enter();
        walk_property(self, property);
        self.exit();
    }
}
