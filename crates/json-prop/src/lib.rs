//! Path-addressed property access for JSON documents.
//!
//! Operations address a location inside a decoded JSON document with a
//! delimited path string such as `one.two.three[2]` — property names
//! separated by a caller-chosen separator, with an optional `[index]`
//! suffix per segment — and read, create, update, or delete the value
//! there. The separator defaults to `.` when an empty string is supplied;
//! a path equal to the bare separator addresses the document root.
//!
//! All four operations resolve the path the same way, one recursion level
//! per segment, and report failures through [`PropError`]: absent
//! properties, indexed access into non-sequences, out-of-range indices,
//! malformed index tokens, and create on an existing path. A failed
//! multi-segment write never leaves a partial mutation behind.
//!
//! # Example
//!
//! ```
//! use json_prop::{get_property, add_property, update_property, delete_property};
//! use serde_json::json;
//!
//! let mut doc = json!({
//!     "one": {
//!         "two": {"three": [1, 2, 3]},
//!         "four": {"five": [11, 22, 33]},
//!     }
//! });
//! let doc = doc.as_object_mut().unwrap();
//!
//! assert_eq!(get_property(doc, "one.two.three[1]", ".").unwrap(), json!(2));
//!
//! // Update appends when the index equals the current length
//! update_property(doc, "one.two.three[3]", ".", json!("x")).unwrap();
//! assert_eq!(
//!     get_property(doc, "one.two.three", ".").unwrap(),
//!     json!([1, 2, 3, "x"])
//! );
//!
//! // Create is strictly additive
//! let err = add_property(doc, "one", ".", json!("y")).unwrap_err();
//! assert_eq!(err.to_string(), "Property one already exists");
//!
//! delete_property(doc, "one.two", ".").unwrap();
//! assert!(get_property(doc, "one.two", ".").is_err());
//! ```

pub mod add;
pub mod delete;
pub mod get;
pub mod types;
pub mod update;

pub use add::add_property;
pub use delete::delete_property;
pub use get::{exists, get_property};
pub use types::{Document, PropError, Segment, SegmentError};
pub use update::update_property;
