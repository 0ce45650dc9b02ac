//! Dot-path addressing inside nested documents.

use serde_json::{Map, Value};

use super::Document;

/// What: Look up the value stored at a dot-delimited path.
///
/// Inputs:
/// - `document`: Document to walk from its root
/// - `path`: Dot-notation path (e.g., "common.greeting")
///
/// Output:
/// - `Some(&Value)` at the final key, or `None` when the path does not resolve
///
/// Details:
/// - Returns `None` if any intermediate key is missing or holds a non-object value
/// - Arrays are never indexed; a segment under an array resolves to `None`
/// - A stored `null` is a defined value and is returned as `Some(Value::Null)`
#[must_use]
pub fn get_path<'a>(document: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// What: Store a value at a dot-delimited path, creating intermediate objects.
///
/// Inputs:
/// - `document`: Document to mutate in place
/// - `path`: Dot-notation path of the destination key
/// - `value`: Value to store at the final key
///
/// Details:
/// - Every segment except the last is walked or created as an object
/// - A non-object value found at an intermediate segment is replaced by an empty object
/// - An existing value at the final key is overwritten
pub fn set_path(document: &mut Document, path: &str, value: Value) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let Some(last) = segments.pop() else {
        return;
    };

    let mut current = document;
    for segment in segments {
        let slot = current
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Some(next) = slot.as_object_mut() else {
            return;
        };
        current = next;
    }
    current.insert(last.to_string(), value);
}
