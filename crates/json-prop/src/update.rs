//! Update: create-or-replace at a path.

use std::cmp::Ordering;

use serde_json::Value;

use json_prop_path::{is_root, join, normalize_separator, tokenize, Segment};

use crate::add::add_property;
use crate::get::get_property;
use crate::types::{Document, PropError};

/// Set the value at `path`, creating it when absent.
///
/// A path that does not currently resolve is handed to
/// [`add_property`] wholesale; that is how appends at `name[len]` and
/// deep creates reach update callers. An existing location is replaced in
/// place, preserving its position among siblings.
pub fn update_property(
    doc: &mut Document,
    path: &str,
    separator: &str,
    value: Value,
) -> Result<(), PropError> {
    let separator = normalize_separator(separator);
    if get_property(doc, path, separator).is_err() {
        return add_property(doc, path, separator, value);
    }
    if is_root(path, separator) {
        doc.insert(separator.to_string(), value);
        return Ok(());
    }
    let segments = tokenize(path, separator)?;
    if segments.is_empty() {
        return Ok(());
    }
    update_segments(doc, &segments, separator, value)
}

fn update_segments(
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
        if let Some(arr) = doc.get_mut(head.property()).and_then(Value::as_array_mut) {
            if tail.is_empty() {
                match index.cmp(&arr.len()) {
                    Ordering::Less => arr[index] = value,
                    Ordering::Equal => arr.push(value),
                    Ordering::Greater => {}
                }
                return Ok(());
            }
            if let Some(Value::Object(element)) = arr.get_mut(index) {
                return update_segments(element, tail, separator, value);
            }
        }
        // Non-sequence slot or non-mapping element: the plain-key branches
        // below take over.
    }

    if tail.is_empty() {
        doc.insert(head.property().to_string(), value);
        return Ok(());
    }
    match doc.get_mut(head.property()) {
        Some(Value::Object(map)) => update_segments(map, tail, separator, value),
        Some(Value::Null) => Ok(()),
        Some(_) => {
            // Legacy fallthrough: a leaf blocking deeper descent turns the
            // remaining path into a literal key at this level.
            doc.insert(join(segments, separator), value);
            Ok(())
        }
        None => Err(PropError::PropertyNotExist(head.property().to_string())),
    }
}
