//! Core types for the property engine.

use serde_json::Value;
use thiserror::Error;

pub use json_prop_path::{Segment, SegmentError};

/// A document root. JSON documents decode to a string-keyed mapping at the
/// top level; everything below it is an arbitrary [`Value`].
pub type Document = serde_json::Map<String, Value>;

/// Errors produced by the property operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropError {
    /// A named segment is absent at the level where resolution stopped.
    #[error("Property {0} does not exist")]
    PropertyNotExist(String),
    /// An indexed segment targets a value that is not a sequence.
    #[error("{0}: is not an array")]
    NotAnArray(String),
    /// An index fell outside the bounds accepted by the operation.
    #[error("{property}: min index is 0, max index is {len}")]
    IndexOutOfRange { property: String, len: usize },
    /// A bracketed index token failed integer parsing.
    #[error("{property}[{token}] must be of type number")]
    InvalidIndex { property: String, token: String },
    /// Create was invoked on a path that already resolves.
    #[error("Property {0} already exists")]
    AlreadyExists(String),
}

impl From<SegmentError> for PropError {
    fn from(err: SegmentError) -> Self {
        match err {
            SegmentError::InvalidIndex { property, token } => {
                PropError::InvalidIndex { property, token }
            }
        }
    }
}
