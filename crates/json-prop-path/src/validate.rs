//! Validation functions for property paths.
//!
//! These are opt-in checks for callers that want to reject suspicious paths
//! up front; the tokenizer itself stays permissive.

use thiserror::Error;

use crate::normalize_separator;

/// Maximum allowed path string length.
const MAX_PATH_LENGTH: usize = 1024;

/// Maximum allowed number of segments.
const MAX_SEGMENTS: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Path too long")]
    PathTooLong,
    #[error("Too many segments")]
    TooManySegments,
    #[error("Invalid property name: {0}")]
    InvalidPropertyName(String),
}

/// Check a property name against the path grammar: one or more runs of word
/// characters (`[0-9A-Za-z_]`), optionally joined or terminated by single
/// hyphens.
///
/// # Example
///
/// ```
/// use json_prop_path::is_property_name;
///
/// assert!(is_property_name("avatars"));
/// assert!(is_property_name("map_a"));
/// assert!(is_property_name("load-balancers"));
/// assert!(!is_property_name(""));
/// assert!(!is_property_name("-leading"));
/// assert!(!is_property_name("a--b"));
/// assert!(!is_property_name("a.b"));
/// ```
pub fn is_property_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let mut prev_word = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            prev_word = true;
        } else if c == '-' {
            if !prev_word {
                return false;
            }
            prev_word = false;
        } else {
            return false;
        }
    }
    true
}

/// Validate a path string: length limits plus the property-name grammar of
/// every fragment. A well-formed `[digits]` suffix is stripped before the
/// name check; anything else must validate as a bare name.
///
/// # Errors
///
/// Returns an error if the path exceeds the maximum length (1024
/// characters) or the maximum segment count (256), or if a fragment's name
/// fails the grammar.
///
/// # Example
///
/// ```
/// use json_prop_path::validate_path;
///
/// validate_path("one.two.three[2]", ".").unwrap();
/// validate_path(".", ".").unwrap(); // root is valid
/// validate_path("one.t!wo", ".").unwrap_err();
/// ```
pub fn validate_path(path: &str, separator: &str) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    let separator = normalize_separator(separator);
    if path.is_empty() || path == separator {
        return Ok(());
    }
    let fragments: Vec<&str> = path
        .split(separator)
        .filter(|fragment| !fragment.is_empty())
        .collect();
    if fragments.len() > MAX_SEGMENTS {
        return Err(ValidationError::TooManySegments);
    }
    for fragment in fragments {
        let name = match fragment.find('[') {
            Some(open)
                if open > 0
                    && fragment.ends_with(']')
                    && fragment.len() - 1 > open + 1
                    && fragment[open + 1..fragment.len() - 1]
                        .bytes()
                        .all(|b| b.is_ascii_digit()) =>
            {
                &fragment[..open]
            }
            _ => fragment,
        };
        if !is_property_name(name) {
            return Err(ValidationError::InvalidPropertyName(name.to_string()));
        }
    }
    Ok(())
}
