//! Legacy-data migration and the save-time normalization gate.
//!
//! The stored correct-answer shape for note/table/flowchart blanks evolved
//! from flat strings to structured records. [`migrate_legacy_text_map`] is
//! the explicit upgrade function the data-migration collaborator runs on
//! legacy rows, so grading code never needs ad hoc type checks.
//!
//! [`normalize_correct_answer_for_save`] is the single gate the authoring
//! collaborator calls before persisting any correct answer. It dispatches on
//! the payload's *shape* rather than a question type tag, because the caller
//! does not always have the tag at hand when persisting. Storage
//! normalization preserves case (see [`super::text::normalize_for_store`]);
//! the case policy is applied at comparison time instead.

use serde_json::{Map, Value, json};

use crate::utilities::text::normalize_for_store;

const BLANKS_KEY: &str = "blanks";
const MATCHES_KEY: &str = "matches";
const LABELS_KEY: &str = "labels";
const ANSWERS_KEY: &str = "answers";
const ANSWER_KEY: &str = "answer";
const ACCEPTED_VARIANTS_KEY: &str = "acceptedVariants";
const STRICT_WORD_ORDER_KEY: &str = "strictWordOrder";

/// Upgrades a legacy flat-string answer map to the structured-blank shape.
///
/// Bare string values become
/// `{"answer": s, "acceptedVariants": [], "strictWordOrder": true}`. Values
/// already in object form pass through with any missing sub-fields defaulted
/// in. Values of any other JSON type are left untouched rather than guessed
/// at.
pub fn migrate_legacy_text_map(raw: &Map<String, Value>) -> Map<String, Value> {
    let mut migrated = Map::new();
    for (key, value) in raw {
        let upgraded = match value {
            Value::String(answer) => json!({
                ANSWER_KEY: answer,
                ACCEPTED_VARIANTS_KEY: [],
                STRICT_WORD_ORDER_KEY: true,
            }),
            Value::Object(blank) => {
                let mut blank = blank.clone();
                blank
                    .entry(ACCEPTED_VARIANTS_KEY)
                    .or_insert_with(|| Value::Array(Vec::new()));
                blank.entry(STRICT_WORD_ORDER_KEY).or_insert(Value::Bool(true));
                Value::Object(blank)
            }
            other => other.clone(),
        };
        migrated.insert(key.clone(), upgraded);
    }
    migrated
}

/// Normalizes a correct-answer payload in place before it is persisted.
///
/// Dispatches on the payload's shape, checking the top-level keys in priority
/// order `blanks`, `matches`, `labels`, `answers`, `answer`:
/// - `blanks` / `labels`: string values are store-normalized; structured
///   values have their `answer` and each `acceptedVariants` entry normalized.
/// - `matches`: flat string values are store-normalized.
/// - `answers`: each element is store-normalized.
/// - `answer`: store-normalized, along with any sibling `acceptedVariants`.
///
/// `Null` and non-object payloads pass through unchanged; this is a no-op,
/// not an error, so callers can feed optional columns straight through.
pub fn normalize_correct_answer_for_save(payload: &mut Value) {
    let Value::Object(top) = payload else {
        return;
    };

    if top.contains_key(BLANKS_KEY) {
        if let Some(Value::Object(map)) = top.get_mut(BLANKS_KEY) {
            normalize_text_value_map(map);
        }
        return;
    }
    if top.contains_key(MATCHES_KEY) {
        if let Some(Value::Object(map)) = top.get_mut(MATCHES_KEY) {
            normalize_flat_map(map);
        }
        return;
    }
    if top.contains_key(LABELS_KEY) {
        if let Some(Value::Object(map)) = top.get_mut(LABELS_KEY) {
            normalize_text_value_map(map);
        }
        return;
    }
    if top.contains_key(ANSWERS_KEY) {
        if let Some(Value::Array(items)) = top.get_mut(ANSWERS_KEY) {
            normalize_string_array(items);
        }
        return;
    }
    if top.contains_key(ANSWER_KEY) {
        if let Some(Value::String(answer)) = top.get_mut(ANSWER_KEY) {
            *answer = normalize_for_store(answer);
        }
        if let Some(Value::Array(items)) = top.get_mut(ACCEPTED_VARIANTS_KEY) {
            normalize_string_array(items);
        }
    }
}

fn normalize_string_array(items: &mut [Value]) {
    for item in items {
        if let Value::String(text) = item {
            *text = normalize_for_store(text);
        }
    }
}

fn normalize_flat_map(map: &mut Map<String, Value>) {
    for value in map.values_mut() {
        if let Value::String(text) = value {
            *text = normalize_for_store(text);
        }
    }
}

/// Normalizes a `string | StructuredBlank` union map in place.
fn normalize_text_value_map(map: &mut Map<String, Value>) {
    for value in map.values_mut() {
        match value {
            Value::String(text) => *text = normalize_for_store(text),
            Value::Object(blank) => {
                if let Some(Value::String(answer)) = blank.get_mut(ANSWER_KEY) {
                    *answer = normalize_for_store(answer);
                }
                if let Some(Value::Array(items)) = blank.get_mut(ACCEPTED_VARIANTS_KEY) {
                    normalize_string_array(items);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_migrate_bare_string() {
        let raw = as_map(json!({ "1": "fifteen percent" }));
        let migrated = migrate_legacy_text_map(&raw);
        assert_eq!(
            Value::Object(migrated),
            json!({
                "1": {
                    "answer": "fifteen percent",
                    "acceptedVariants": [],
                    "strictWordOrder": true,
                }
            })
        );
    }

    #[test]
    fn test_migrate_structured_passes_through() {
        let raw = as_map(json!({
            "1": {
                "answer": "15%",
                "acceptedVariants": ["fifteen percent"],
                "strictWordOrder": false,
            }
        }));
        let migrated = migrate_legacy_text_map(&raw);
        assert_eq!(Value::Object(migrated), Value::Object(raw));
    }

    #[test]
    fn test_migrate_fills_missing_sub_fields() {
        let raw = as_map(json!({ "1": { "answer": "oxygen" } }));
        let migrated = migrate_legacy_text_map(&raw);
        assert_eq!(migrated["1"]["acceptedVariants"], json!([]));
        assert_eq!(migrated["1"]["strictWordOrder"], json!(true));
    }

    #[test]
    fn test_migrate_leaves_unexpected_types_alone() {
        let raw = as_map(json!({ "1": 42, "2": null }));
        let migrated = migrate_legacy_text_map(&raw);
        assert_eq!(migrated["1"], json!(42));
        assert_eq!(migrated["2"], Value::Null);
    }

    #[test]
    fn test_save_null_is_a_no_op() {
        let mut payload = Value::Null;
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(payload, Value::Null);
    }

    #[test]
    fn test_save_non_object_is_a_no_op() {
        let mut payload = json!("just a string");
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(payload, json!("just a string"));
    }

    #[test]
    fn test_save_single_answer_with_variants() {
        let mut payload = json!({
            "answer": "  Carbon   Dioxide ",
            "acceptedVariants": [" CO2 ", "carbon  dioxide gas"],
        });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(
            payload,
            json!({
                "answer": "Carbon Dioxide",
                "acceptedVariants": ["CO2", "carbon dioxide gas"],
            })
        );
    }

    #[test]
    fn test_save_preserves_case() {
        let mut payload = json!({ "answer": "  TRUE " });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(payload, json!({ "answer": "TRUE" }));
    }

    #[test]
    fn test_save_answers_array() {
        let mut payload = json!({ "answers": [" A ", "B\t"], "maxSelections": 2 });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(payload, json!({ "answers": ["A", "B"], "maxSelections": 2 }));
    }

    #[test]
    fn test_save_matches_map() {
        let mut payload = json!({ "matches": { "1": " iv ", "2": "viii" } });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(payload, json!({ "matches": { "1": "iv", "2": "viii" } }));
    }

    #[test]
    fn test_save_blanks_union_values() {
        let mut payload = json!({
            "blanks": {
                "1": "  flat  value ",
                "2": {
                    "answer": " Structured  Answer ",
                    "acceptedVariants": ["  variant one "],
                    "strictWordOrder": false,
                },
            }
        });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(
            payload,
            json!({
                "blanks": {
                    "1": "flat value",
                    "2": {
                        "answer": "Structured Answer",
                        "acceptedVariants": ["variant one"],
                        "strictWordOrder": false,
                    },
                }
            })
        );
    }

    #[test]
    fn test_save_labels_map() {
        let mut payload = json!({ "labels": { "A": " left  ventricle ", "B": { "answer": " Aorta " } } });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(
            payload,
            json!({ "labels": { "A": "left ventricle", "B": { "answer": "Aorta" } } })
        );
    }

    #[test]
    fn test_save_shape_priority_order() {
        // When several recognized keys are present, the highest-priority
        // shape wins and the rest are left untouched.
        let mut payload = json!({
            "blanks": { "1": " a " },
            "answer": "  not normalized  ",
        });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(payload["blanks"]["1"], json!("a"));
        assert_eq!(payload["answer"], json!("  not normalized  "));
    }

    #[test]
    fn test_save_unrecognized_shape_unchanged() {
        let mut payload = json!({ "essayPrompt": "  keep  me " });
        normalize_correct_answer_for_save(&mut payload);
        assert_eq!(payload, json!({ "essayPrompt": "  keep  me " }));
    }
}
