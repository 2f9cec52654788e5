//! Delete: exists-then-remove with sequence collapse.

use serde_json::Value;

use json_prop_path::{is_root, join, normalize_separator, tokenize, Segment};

use crate::get::get_property;
use crate::types::{Document, PropError};

/// Remove the value addressed by `path`.
///
/// The path must currently resolve; any read failure is returned verbatim
/// and the document is left untouched. A root path clears the whole
/// mapping. Removing a sequence element collapses the sequence, and a
/// mapping element emptied by a deeper delete is removed from its enclosing
/// sequence. Mappings emptied inside another mapping stay in place.
pub fn delete_property(doc: &mut Document, path: &str, separator: &str) -> Result<(), PropError> {
    let separator = normalize_separator(separator);
    get_property(doc, path, separator)?;
    if is_root(path, separator) {
        doc.clear();
        return Ok(());
    }
    let segments = tokenize(path, separator)?;
    if segments.is_empty() {
        return Ok(());
    }
    delete_segments(doc, &segments, separator)
}

fn delete_segments(
    doc: &mut Document,
    segments: &[Segment],
    separator: &str,
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
        if index >= arr.len() {
            return Err(PropError::IndexOutOfRange {
                property: property.to_string(),
                len: arr.len(),
            });
        }
        if tail.is_empty() {
            arr.remove(index);
            return Ok(());
        }
        if let Some(Value::Object(element)) = arr.get_mut(index) {
            delete_segments(element, tail, separator)?;
            // An element container emptied by the delete does not stay behind.
            let emptied = element.is_empty();
            if emptied {
                arr.remove(index);
            }
            return Ok(());
        }
        // Non-mapping element with a deeper path: handled as a plain key below.
    }

    if tail.is_empty() {
        doc.remove(head.property());
        return Ok(());
    }
    match doc.get_mut(head.property()) {
        Some(Value::Object(map)) => delete_segments(map, tail, separator),
        Some(Value::Null) => Ok(()),
        Some(_) => {
            // Legacy fallthrough: a deeper path below a leaf removes the
            // remaining path text as a literal key.
            doc.remove(&join(segments, separator));
            Ok(())
        }
        None => Err(PropError::PropertyNotExist(head.property().to_string())),
    }
}
