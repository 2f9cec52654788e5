//! Read access: resolve a path to a value without mutating the document.

use serde_json::{Map, Value};

use json_prop_path::{is_root, join, normalize_separator, tokenize, Segment};

use crate::types::{Document, PropError};

/// Resolve `path` inside `doc` and return a clone of the value found there.
///
/// A root path (empty, or equal to the separator) returns a copy of the
/// whole top-level mapping. The document itself is never mutated.
///
/// Descending *through* a leaf is not an error: a path that continues below
/// a non-mapping value yields that value wrapped as a one-entry mapping
/// keyed by its property name.
pub fn get_property(doc: &Document, path: &str, separator: &str) -> Result<Value, PropError> {
    let separator = normalize_separator(separator);
    if is_root(path, separator) {
        return Ok(Value::Object(doc.clone()));
    }
    let segments = tokenize(path, separator)?;
    if segments.is_empty() {
        // Nothing but separators: no addressable property.
        return Err(PropError::PropertyNotExist(path.to_string()));
    }
    get_segments(doc, &segments, separator)
}

/// Check whether `path` currently resolves inside `doc`.
pub fn exists(doc: &Document, path: &str, separator: &str) -> bool {
    get_property(doc, path, separator).is_ok()
}

/// Look up the working value for one segment, applying its index.
///
/// Validation order: existence, then sequence kind, then bounds.
fn resolve_step<'a>(doc: &'a Document, head: &Segment) -> Result<&'a Value, PropError> {
    let value = doc
        .get(head.property())
        .ok_or_else(|| PropError::PropertyNotExist(head.property().to_string()))?;
    match head.index() {
        Some(index) => {
            let arr = value
                .as_array()
                .ok_or_else(|| PropError::NotAnArray(head.property().to_string()))?;
            arr.get(index).ok_or_else(|| PropError::IndexOutOfRange {
                property: head.property().to_string(),
                len: arr.len(),
            })
        }
        None => Ok(value),
    }
}

fn get_segments(doc: &Document, segments: &[Segment], separator: &str) -> Result<Value, PropError> {
    let (head, tail) = match segments.split_first() {
        Some(pair) => pair,
        None => return Ok(Value::Object(doc.clone())),
    };
    let current = resolve_step(doc, head)?;
    if tail.is_empty() {
        return Ok(current.clone());
    }
    match current {
        Value::Object(map) => get_segments(map, tail, separator),
        Value::Null => Err(PropError::PropertyNotExist(join(segments, separator))),
        leaf => {
            let mut wrapped = Map::new();
            wrapped.insert(head.property().to_string(), leaf.clone());
            Ok(Value::Object(wrapped))
        }
    }
}
