//! JSON Pointer (RFC 6901) helpers: name a node, or select one by name.
//!
//! A property node has no pointer of its own; it is named by the pointer of its
//! value, which is also what [`resolve_property`] accepts.

use crate::document::{Property, Value};
use crate::error::{LineageError, Result};
use crate::lineage::find_lineage;
use crate::node::{Container, Node};

/// Split a pointer into unescaped reference tokens.
///
/// `""` names the whole document and yields no tokens.
///
/// # Errors
///
/// Returns [`LineageError::InvalidPointer`] if the pointer is non-empty and
/// does not start with `/`, or contains a `~` not followed by `0` or `1`.
///
/// # Examples
///
/// ```
/// use lineage_core::parse_pointer;
///
/// assert_eq!(parse_pointer("/a~1b/m~0n/0").unwrap(), ["a/b", "m~n", "0"]);
/// assert!(parse_pointer("").unwrap().is_empty());
/// assert!(parse_pointer("a").is_err());
/// ```
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(invalid(pointer, "must be empty or start with '/'"));
    };
    rest.split('/')
        .map(|token| unescape_segment(pointer, token))
        .collect()
}

fn unescape_segment(pointer: &str, token: &str) -> Result<String> {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            Some(other) => {
                return Err(invalid(pointer, &format!("invalid escape sequence '~{other}'")));
            }
            None => return Err(invalid(pointer, "unterminated escape sequence '~'")),
        }
    }
    Ok(out)
}

/// Escape one reference token: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn invalid(pointer: &str, message: &str) -> LineageError {
    LineageError::InvalidPointer {
        pointer: pointer.to_string(),
        message: message.to_string(),
    }
}

/// Select the node named by `pointer`.
///
/// Object tokens pick the value of the first property with that key. Array
/// tokens must be canonical indices (`0`, `1`, ... without leading zeros);
/// `-` and out-of-range indices select nothing.
///
/// # Errors
///
/// Returns [`LineageError::InvalidPointer`] for malformed pointer syntax. A
/// well-formed pointer that names nothing is `Ok(None)`.
///
/// # Examples
///
/// ```
/// use lineage_core::{resolve, NodeKind, Value};
///
/// let root = Value::from_json_str(r#"{"a":{"b":1},"c":[2,3]}"#).unwrap();
/// assert_eq!(resolve(&root, "/c/1").unwrap().unwrap().kind(), NodeKind::Number);
/// assert!(resolve(&root, "/c/2").unwrap().is_none());
/// ```
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Result<Option<Node<'a>>> {
    let segments = parse_pointer(pointer)?;
    let mut current = root;
    for segment in &segments {
        match step(current, segment) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(Node::from(current)))
}

/// Select the property node whose value `pointer` names.
///
/// Returns `Ok(None)` for the root pointer, for pointers into arrays (array
/// elements have no property) and for pointers that name nothing.
pub fn resolve_property<'a>(root: &'a Value, pointer: &str) -> Result<Option<&'a Property>> {
    let mut segments = parse_pointer(pointer)?;
    let Some(last) = segments.pop() else {
        return Ok(None);
    };
    let mut current = root;
    for segment in &segments {
        match step(current, segment) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(current.as_object().and_then(|object| object.property(&last)))
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(object) => object.get(segment),
        Value::Array(array) => parse_index(segment).and_then(|index| array.get(index)),
        _ => None,
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.is_empty()
            && !segment.starts_with('0')
            && segment.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

/// Render the pointer of `target` from its lineage.
///
/// `lineage` must be the lineage of `target` (as returned by
/// [`find_lineage`]). Property keys contribute one token each; array ancestors
/// contribute the index of the child leading towards the target. A property
/// target is named by its value's pointer.
pub fn pointer_from_lineage(lineage: &[Container<'_>], target: Node<'_>) -> String {
    let mut pointer = String::new();
    for (i, container) in lineage.iter().enumerate() {
        match container {
            Container::Property(property) => push_segment(&mut pointer, property.key()),
            Container::Array(array) => {
                let next = lineage.get(i + 1).map_or(target, |c| Node::from(*c));
                if let Some(index) = array
                    .elements()
                    .iter()
                    .position(|element| Node::from(element).same(next))
                {
                    push_segment(&mut pointer, &index.to_string());
                }
            }
            Container::Object(_) => {}
        }
    }
    if let Node::Property(property) = target {
        push_segment(&mut pointer, property.key());
    }
    pointer
}

fn push_segment(pointer: &mut String, segment: &str) {
    pointer.push('/');
    pointer.push_str(&escape_segment(segment));
}

/// The pointer naming `target` inside the tree rooted at `root`, or `None` if
/// `target` is not part of that tree.
///
/// # Examples
///
/// ```
/// use lineage_core::{pointer_to, Value};
///
/// let root = Value::from_json_str(r#"{"a/b":[true,{"c":null}]}"#).unwrap();
/// let object = root.as_object().unwrap();
/// let array = object.get("a/b").unwrap().as_array().unwrap();
/// let inner = array.get(1).unwrap().as_object().unwrap();
/// let null = inner.get("c").unwrap();
///
/// assert_eq!(pointer_to(&root, null).as_deref(), Some("/a~1b/1/c"));
/// assert_eq!(pointer_to(&root, &root).as_deref(), Some(""));
/// ```
pub fn pointer_to<'t>(root: &Value, target: impl Into<Node<'t>>) -> Option<String> {
    let target = target.into();
    find_lineage(root, target).map(|lineage| pointer_from_lineage(&lineage, target))
}
