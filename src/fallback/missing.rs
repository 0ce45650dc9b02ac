//! Recursive detection of keys a translation is missing relative to its source.

use serde_json::Value;

use super::Document;

/// What: List every dot-path present in `source` but absent or empty in `candidate`.
///
/// Inputs:
/// - `source`: Reference document (usually the untranslated content)
/// - `candidate`: Translation document to check
///
/// Output:
/// - Flat list of dot-paths in `source` key order
///
/// Details:
/// - A key counts as missing when the candidate value is absent, `null`, or `""`
/// - When both sides hold objects the check recurses; once a branch head is
///   missing its children are not reported separately
/// - Arrays and scalars are leaves and are never recursed into
#[must_use]
pub fn find_missing_keys(source: &Document, candidate: &Document) -> Vec<String> {
    let mut missing = Vec::new();
    collect_missing(source, candidate, "", &mut missing);
    missing
}

/// What: Recursive worker for `find_missing_keys`.
///
/// Inputs:
/// - `source`: Source subtree
/// - `candidate`: Candidate subtree at the same position
/// - `prefix`: Dot-path of the subtree root ("" at the top level)
/// - `missing`: Accumulator for missing paths
fn collect_missing(
    source: &Document,
    candidate: &Document,
    prefix: &str,
    missing: &mut Vec<String>,
) {
    for (key, source_value) in source {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match candidate.get(key) {
            None | Some(Value::Null) => missing.push(full_key),
            Some(Value::String(text)) if text.is_empty() => missing.push(full_key),
            Some(Value::Object(nested_candidate)) => {
                if let Value::Object(nested_source) = source_value {
                    collect_missing(nested_source, nested_candidate, &full_key, missing);
                }
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("test fixture must be an object, got {other}"),
        }
    }

    #[test]
    /// What: A complete translation reports nothing.
    fn complete_translation_has_no_missing_keys() {
        let source = doc(json!({ "a": "X", "g": { "x": "1" }, "list": [1, 2] }));
        let candidate = doc(json!({ "a": "A", "g": { "x": "uno" }, "list": ["uno"] }));
        assert!(find_missing_keys(&source, &candidate).is_empty());
    }

    #[test]
    /// What: Absent, null and empty-string values are all reported, in source order.
    fn absent_null_and_empty_are_missing() {
        let source = doc(json!({ "a": "X", "b": "Y", "c": "Z", "d": "W" }));
        let candidate = doc(json!({ "a": "A", "b": null, "c": "" }));
        assert_eq!(find_missing_keys(&source, &candidate), vec!["b", "c", "d"]);
    }

    #[test]
    /// What: Nested gaps are reported with their full dot-path.
    fn nested_missing_key_uses_full_path() {
        let source = doc(json!({ "g": { "x": "1", "y": "2", "deep": { "z": "3" } } }));
        let candidate = doc(json!({ "g": { "x": "uno", "deep": {} } }));
        assert_eq!(find_missing_keys(&source, &candidate), vec!["g.y", "g.deep.z"]);
    }

    #[test]
    /// What: A wholly absent branch is reported once at its head.
    fn absent_branch_reported_at_head_only() {
        let source = doc(json!({ "g": { "x": "1", "y": "2" }, "t": "T" }));
        let candidate = doc(json!({ "t": "t" }));
        assert_eq!(find_missing_keys(&source, &candidate), vec!["g"]);
    }

    #[test]
    /// What: Shape mismatches with a present candidate value are not missing.
    ///
    /// Details:
    /// - Source object vs candidate scalar, and source scalar vs candidate object,
    ///   both count as present.
    fn shape_mismatch_is_not_missing() {
        let source = doc(json!({ "g": { "x": "1" }, "s": "plain", "arr": ["a"] }));
        let candidate = doc(json!({ "g": "flattened", "s": { "x": "obj" }, "arr": [] }));
        assert!(find_missing_keys(&source, &candidate).is_empty());
    }
}
