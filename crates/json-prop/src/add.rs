//! Create: strictly additive writes.

use serde_json::Value;

use json_prop_path::{is_root, normalize_separator, tokenize, Segment};

use crate::get::get_property;
use crate::types::{Document, PropError};

/// Add a value at `path`, failing if the path already resolves.
///
/// Writing into a sequence is strict append: only `name[len]` grows the
/// sequence. Intermediate segments must already exist; absent ones fail
/// with [`PropError::PropertyNotExist`].
pub fn add_property(
    doc: &mut Document,
    path: &str,
    separator: &str,
    value: Value,
) -> Result<(), PropError> {
    let separator = normalize_separator(separator);
    if get_property(doc, path, separator).is_ok() {
        return Err(PropError::AlreadyExists(path.to_string()));
    }
    if is_root(path, separator) {
        // Degenerate root write: the separator itself becomes the key.
        doc.insert(separator.to_string(), value);
        return Ok(());
    }
    let segments = tokenize(path, separator)?;
    if segments.is_empty() {
        return Ok(());
    }
    add_segments(doc, &segments, separator, value)
}

fn add_segments(
    doc: &mut Document,
    segments: &[Segment],
    separator: &str,
    value: Value,
) -> Result<(), PropError> {
    let (head, tail) = match segments.split_first() {
        Some(pair) => pair,
        None => return Ok(()),
    };

    if let Some(index) = head.index() {
        let property = head.property();
        let slot = doc
            .get_mut(property)
            .ok_or_else(|| PropError::PropertyNotExist(property.to_string()))?;
        let arr = match slot.as_array_mut() {
            Some(arr) => arr,
            None => return Err(PropError::NotAnArray(property.to_string())),
        };
        if !tail.is_empty() {
            if let Some(Value::Object(element)) = arr.get_mut(index) {
                return add_segments(element, tail, separator, value);
            }
            // Deeper create below a non-mapping element never mutates.
            return Ok(());
        }
        // Strict append: only the next free slot grows the sequence; any
        // larger index drops the value silently.
        if index == arr.len() {
            arr.push(value);
        }
        return Ok(());
    }

    if tail.is_empty() {
        if !doc.contains_key(head.property()) {
            doc.insert(head.property().to_string(), value);
        }
        return Ok(());
    }
    match doc.get_mut(head.property()) {
        Some(Value::Object(map)) => add_segments(map, tail, separator, value),
        Some(_) => Ok(()),
        None => Err(PropError::PropertyNotExist(head.property().to_string())),
    }
}
