//! Grading for the flat mapping family: word-bank blanks and the
//! heading/information/feature/sentence-ending matching types.
//!
//! Both payloads hold a flat string-to-string map under `blanks` or
//! `matches`. Partial credit applies per key via the mapping scorer; the
//! teacher's key set is authoritative.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::GradeError;
use crate::scorer::score_mapping;
use crate::strategies::decode;
use crate::traits::strategy::AnswerStrategy;
use crate::types::GradeResult;

pub struct MappingStrategy;

/// Pulls the flat pair map out of a payload, accepting either the `blanks`
/// or the `matches` spelling. Returns `Ok(None)` when neither key is
/// present so the caller can decide whether that side is required.
fn flat_pairs(payload: &Value, what: &str) -> Result<Option<BTreeMap<String, String>>, GradeError> {
    match payload {
        Value::Object(top) => match top.get("blanks").or_else(|| top.get("matches")) {
            Some(map) => decode(map, what).map(Some),
            None => Ok(None),
        },
        _ => Err(GradeError::ShapeMismatch(format!(
            "{what}: expected an object with blanks or matches"
        ))),
    }
}

impl AnswerStrategy for MappingStrategy {
    fn grade(
        &self,
        student_answer: &Value,
        correct_answer: &Value,
        case_sensitive: bool,
    ) -> Result<GradeResult, GradeError> {
        let correct = flat_pairs(correct_answer, "correct answer")?
            .ok_or_else(|| GradeError::MissingField("blanks or matches".to_string()))?;
        // A student who answered nothing still gets a graded zero.
        let student = flat_pairs(student_answer, "student answer")?.unwrap_or_default();

        Ok(GradeResult::partial(score_mapping(
            &student,
            &correct,
            case_sensitive,
        )))
    }
}
