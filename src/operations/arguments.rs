//! Merging caller arguments over per-operation defaults.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why caller arguments could not be turned into variables.
#[derive(Debug, Error)]
pub enum ArgumentsError {
    /// Serialization itself failed.
    #[error("Failed to encode arguments: {0}")]
    Encode(#[from] serde_json::Error),

    /// The arguments encoded to something other than a JSON object.
    #[error("Arguments must encode to a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Encodes a typed arguments value as a variables map.
///
/// `()` and `None` encode to an empty map.
///
/// # Errors
///
/// Returns [`ArgumentsError`] if `args` does not serialize to a JSON object.
pub fn to_variables<A: Serialize + ?Sized>(args: &A) -> Result<Map<String, Value>, ArgumentsError> {
    match serde_json::to_value(args)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        Value::Bool(_) => Err(ArgumentsError::NotAnObject("a boolean")),
        Value::Number(_) => Err(ArgumentsError::NotAnObject("a number")),
        Value::String(_) => Err(ArgumentsError::NotAnObject("a string")),
        Value::Array(_) => Err(ArgumentsError::NotAnObject("an array")),
    }
}

/// Overlays `args` on `defaults`, shallowly.
///
/// Every key the caller supplies with a non-null value replaces the default
/// outright. Nested objects are not merged: a caller `pager` of `{limit: 3}`
/// replaces a default `{limit: 30, offset: 0}` entirely. A `null` value
/// counts as absent and leaves the default (if any) in place.
#[must_use]
pub fn merge_arguments(
    mut defaults: Map<String, Value>,
    args: Map<String, Value>,
) -> Map<String, Value> {
    for (key, value) in args {
        if !value.is_null() {
            defaults.insert(key, value);
        }
    }
    defaults
}
