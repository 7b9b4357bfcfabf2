//! # lineage-core
//!
//! Ancestor lookup over immutable JSON trees that carry **no parent pointers**.
//!
//! Given the root of a document tree and a node inside it, [`find_lineage`]
//! returns the containers (objects, arrays and properties) that enclose the
//! node, root first. Nodes are matched by identity, never by content, so two
//! equal leaves at different positions are told apart.
//!
//! ## Quick start
//!
//! ```rust
//! use lineage_core::{find_lineage, pointer_to, Container, Value};
//!
//! let root = Value::from_json_str(r#"{"a":{"b":1},"c":[2,3]}"#).unwrap();
//! let a = root.as_object().unwrap().property("a").unwrap();
//! let b = a.value().as_object().unwrap().property("b").unwrap();
//!
//! let lineage = find_lineage(&root, b).unwrap();
//! assert_eq!(lineage.len(), 3);
//! assert!(lineage[0].same(&root));
//! assert!(lineage[1].same(a));
//! assert!(matches!(lineage[2], Container::Object(_)));
//!
//! assert_eq!(pointer_to(&root, b).as_deref(), Some("/a/b"));
//! ```
//!
//! ## Modules
//!
//! - [`document`] — the tree: `Value`, `ObjectValue`, `ArrayValue`, `Property`
//! - [`node`] — borrowed node references (`Node`, `Container`) and identity
//! - [`visit`] — double-dispatch `Visitor` contract and default child walks
//! - [`lineage`] — `find_lineage` and the `Lineage` result
//! - [`pointer`] — JSON Pointer naming and selection of nodes
//! - [`stats`] — per-kind node counts and nesting depth
//! - [`error`] — error types for JSON loading and pointer syntax

pub mod document;
pub mod error;
pub mod lineage;
pub mod node;
pub mod pointer;
pub mod stats;
pub mod visit;

pub use document::{ArrayValue, NodeKind, ObjectValue, Property, Value};
pub use error::{LineageError, Result};
pub use lineage::{find_lineage, Lineage};
pub use node::{Container, Node};
pub use pointer::{
    escape_segment, parse_pointer, pointer_from_lineage, pointer_to, resolve, resolve_property,
};
pub use stats::TreeStats;
pub use visit::Visitor;
