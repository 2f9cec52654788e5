//! Delimited property-path grammar.
//!
//! A path addresses a location inside a JSON-like tree: segments separated
//! by a caller-chosen separator, each segment a property name with an
//! optional trailing `[index]` suffix, e.g. `one.two.three[2]`.
//!
//! # Example
//!
//! ```
//! use json_prop_path::{tokenize, join, is_root};
//!
//! let segments = tokenize("one.two.three[2]", ".").unwrap();
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[2].property(), "three");
//! assert_eq!(segments[2].index(), Some(2));
//!
//! // The raw fragments reconstruct the path
//! assert_eq!(join(&segments, "."), "one.two.three[2]");
//!
//! // A path equal to the bare separator denotes the tree root
//! assert!(is_root(".", "."));
//! assert!(is_root("", "."));
//! assert!(!is_root("one", "."));
//! ```

pub mod segment;
pub mod validate;

pub use segment::{Segment, SegmentError};
pub use validate::{is_property_name, validate_path, ValidationError};

/// Separator used when the caller supplies an empty string.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Normalize a caller-supplied separator: empty becomes [`DEFAULT_SEPARATOR`].
pub fn normalize_separator(separator: &str) -> &str {
    if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    }
}

/// Check whether `path` denotes the tree root.
///
/// The empty path and a path equal to exactly the (normalized) separator
/// both address the root.
pub fn is_root(path: &str, separator: &str) -> bool {
    let separator = normalize_separator(separator);
    path.is_empty() || path == separator
}

/// Split a path string into ordered segments.
///
/// The separator is normalized first and an empty path is treated as the
/// separator. Zero-length fragments are discarded, so leading, trailing and
/// doubled separators are tolerated silently. A root path yields an empty
/// vector; so does a non-root path consisting of nothing but separators.
///
/// # Errors
///
/// Propagates [`SegmentError`] from fragment parsing.
///
/// # Example
///
/// ```
/// use json_prop_path::tokenize;
///
/// assert_eq!(tokenize(".", ".").unwrap(), vec![]);
/// assert_eq!(tokenize("a..b.", ".").unwrap().len(), 2);
/// // Empty separator normalizes to "."
/// assert_eq!(tokenize("a.b", "").unwrap().len(), 2);
/// ```
pub fn tokenize(path: &str, separator: &str) -> Result<Vec<Segment>, SegmentError> {
    let separator = normalize_separator(separator);
    let path = if path.is_empty() { separator } else { path };
    if path == separator {
        return Ok(Vec::new());
    }
    path.split(separator)
        .filter(|fragment| !fragment.is_empty())
        .map(Segment::parse)
        .collect()
}

/// Reconstruct a path string from segments.
///
/// Uses each segment's raw fragment text, so indexed segments round-trip
/// with their suffix intact.
pub fn join(segments: &[Segment], separator: &str) -> String {
    let separator = normalize_separator(separator);
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(segment.raw());
    }
    out
}
