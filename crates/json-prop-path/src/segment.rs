//! Segment parsing for delimited property paths.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("{property}[{token}] must be of type number")]
    InvalidIndex { property: String, token: String },
}

/// One component of a property path: a property name with an optional
/// trailing sequence index, e.g. `avatars` or `avatars[2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    raw: String,
    property: String,
    index: Option<usize>,
}

impl Segment {
    /// Parse a single path fragment.
    ///
    /// A fragment of the shape `name[digits]` yields a segment carrying both
    /// the name and the index; text after the closing bracket is ignored.
    /// Anything else is a plain segment whose property is the fragment text
    /// verbatim — a malformed suffix (`x[abc]`, `x[]`, `[0]`) does not index.
    ///
    /// # Errors
    ///
    /// A digit token too large for `usize` returns
    /// [`SegmentError::InvalidIndex`].
    pub fn parse(fragment: &str) -> Result<Segment, SegmentError> {
        if let Some(open) = fragment.find('[') {
            if open > 0 {
                if let Some(close) = fragment[open..].find(']') {
                    let token = &fragment[open + 1..open + close];
                    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                        let property = &fragment[..open];
                        let index = token.parse::<usize>().map_err(|_| {
                            SegmentError::InvalidIndex {
                                property: property.to_string(),
                                token: token.to_string(),
                            }
                        })?;
                        return Ok(Segment {
                            raw: fragment.to_string(),
                            property: property.to_string(),
                            index: Some(index),
                        });
                    }
                }
            }
        }
        Ok(Segment {
            raw: fragment.to_string(),
            property: fragment.to_string(),
            index: None,
        })
    }

    /// The property name addressed by this segment.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The sequence index, if the fragment carried one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The original fragment text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this segment addresses a sequence element.
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }
}
