use lineage_core::visit::{walk_array, walk_object, walk_property, Visitor};
use lineage_core::{ArrayValue, Container, Node, ObjectValue, Property, TreeStats, Value};
use serde_json::Number;

/// Records every handler invocation as a short tag, in call order.
#[derive(Default)]
struct Trace {
    events: Vec<String>,
}

impl<'a> Visitor<'a> for Trace {
    fn visit_string(&mut self, _node: &'a Value, value: &'a str) {
        self.events.push(format!("str:{value}"));
    }

    fn visit_number(&mut self, _node: &'a Value, value: &'a Number) {
        self.events.push(format!("num:{value}"));
    }

    fn visit_boolean(&mut self, _node: &'a Value, value: bool) {
        self.events.push(format!("bool:{value}"));
    }

    fn visit_null(&mut self, _node: &'a Value) {
        self.events.push("null".to_string());
    }

    fn visit_object(&mut self, object: &'a ObjectValue) {
        self.events.push("{".to_string());
        walk_object(self, object);
        self.events.push("}".to_string());
    }

    fn visit_array(&mut self, array: &'a ArrayValue) {
        self.events.push("[".to_string());
        walk_array(self, array);
        self.events.push("]".to_string());
    }

    fn visit_property(&mut self, property: &'a Property) {
        self.events.push(format!("{}:", property.key()));
        walk_property(self, property);
    }
}

fn trace(node: Node<'_>) -> Vec<String> {
    let mut visitor = Trace::default();
    node.accept(&mut visitor);
    visitor.events
}

#[test]
fn traversal_is_preorder_in_document_order() {
    let root = Value::from_json_str(r#"{"z":1,"a":[true,null,"s"],"m":{"k":2.5}}"#).unwrap();
    assert_eq!(
        trace(Node::from(&root)),
        [
            "{", "z:", "num:1", "a:", "[", "bool:true", "null", "str:s", "]", "m:", "{", "k:",
            "num:2.5", "}", "}"
        ]
    );
}

#[test]
fn each_leaf_kind_dispatches_to_its_own_handler() {
    assert_eq!(trace(Node::from(&Value::string("x"))), ["str:x"]);
    assert_eq!(trace(Node::from(&Value::number(7))), ["num:7"]);
    assert_eq!(trace(Node::from(&Value::boolean(false))), ["bool:false"]);
    assert_eq!(trace(Node::from(&Value::null())), ["null"]);
}

#[test]
fn property_accept_visits_key_then_value() {
    let property = Property::new("p", Value::from_json_str("[1]").unwrap());
    let mut visitor = Trace::default();
    property.accept(&mut visitor);
    assert_eq!(visitor.events, ["p:", "[", "num:1", "]"]);
}

#[test]
fn typed_containers_accept_directly() {
    let root = Value::from_json_str(r#"{"a":[1]}"#).unwrap();
    let object = root.as_object().unwrap();
    let array = object.get("a").unwrap().as_array().unwrap();

    let mut visitor = Trace::default();
    object.accept(&mut visitor);
    assert_eq!(visitor.events, ["{", "a:", "[", "num:1", "]", "}"]);

    let mut visitor = Trace::default();
    array.accept(&mut visitor);
    assert_eq!(visitor.events, ["[", "num:1", "]"]);

    let mut visitor = Trace::default();
    Container::Array(array).accept(&mut visitor);
    assert_eq!(visitor.events, ["[", "num:1", "]"]);
}

/// A visitor that overrides nothing still walks every child.
struct LeafCounter(usize);

impl<'a> Visitor<'a> for LeafCounter {
    fn visit_number(&mut self, _node: &'a Value, _value: &'a Number) {
        self.0 += 1;
    }
}

#[test]
fn default_container_handlers_walk_children() {
    let root = Value::from_json_str(r#"[{"a":[1,2]},3,{"b":{"c":4}}]"#).unwrap();
    let mut counter = LeafCounter(0);
    root.accept(&mut counter);
    assert_eq!(counter.0, 4);
}

/// Overriding a container handler without calling `walk_*` prunes the subtree.
struct ObjectPruner(usize);

impl<'a> Visitor<'a> for ObjectPruner {
    fn visit_number(&mut self, _node: &'a Value, _value: &'a Number) {
        self.0 += 1;
    }

    fn visit_object(&mut self, _object: &'a ObjectValue) {}
}

#[test]
fn container_handler_can_prune() {
    let root = Value::from_json_str(r#"[{"a":[1,2]},3,{"b":{"c":4}}]"#).unwrap();
    let mut pruner = ObjectPruner(0);
    root.accept(&mut pruner);
    assert_eq!(pruner.0, 1);
}

#[test]
fn leaf_handlers_receive_the_node_identity() {
    struct FindNull<'a>(Option<&'a Value>);
    impl<'a> Visitor<'a> for FindNull<'a> {
        fn visit_null(&mut self, node: &'a Value) {
            self.0 = Some(node);
        }
    }

    let root = Value::from_json_str(r#"{"a":[0,null]}"#).unwrap();
    let expected = root.as_object().unwrap().get("a").unwrap().as_array().unwrap().get(1).unwrap();

    let mut finder = FindNull(None);
    root.accept(&mut finder);
    assert!(Node::from(finder.0.unwrap()).same(Node::from(expected)));
}

// ============================================================================
// TreeStats
// ============================================================================

#[test]
fn stats_count_every_kind() {
    let root = Value::from_json_str(r#"{"s":"x","n":[1,2.0],"b":true,"z":null,"o":{}}"#).unwrap();
    let stats = TreeStats::collect(&root);

    assert_eq!(stats.strings, 1);
    assert_eq!(stats.numbers, 2);
    assert_eq!(stats.booleans, 1);
    assert_eq!(stats.nulls, 1);
    assert_eq!(stats.objects, 2);
    assert_eq!(stats.arrays, 1);
    assert_eq!(stats.properties, 5);
    assert_eq!(stats.containers(), 8);
    assert_eq!(stats.total(), 13);
}

#[test]
fn stats_depth_matches_longest_lineage() {
    let root = Value::from_json_str(r#"{"a":{"b":[[1]]}}"#).unwrap();
    // object > a > object > b > array > array > 1
    assert_eq!(TreeStats::collect(&root).max_depth, 6);
}

#[test]
fn stats_of_scalar_root() {
    let stats = TreeStats::collect(&Value::null());
    assert_eq!(stats.total(), 1);
    assert_eq!(stats.max_depth, 0);
}
