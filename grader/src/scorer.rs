//! # Scorer Module
//!
//! Partial-credit scoring for keyed answer maps, and the submission-level
//! overall score used by the report layer.

use std::collections::BTreeMap;

use crate::matcher::answer_matches;
use crate::types::{GradeResult, MappingScore};

/// Scores a flat string-to-string answer map against the teacher's map.
///
/// The correct map's keys are the authoritative key set: extra student keys
/// are ignored and missing student keys count as incorrect. Values compare
/// under normalized equality with the exercise's case policy. Per-key
/// variants and word-order flags are the structured families' concern; those
/// strategies resolve variants first and aggregate with the same
/// correct/total formula via [`MappingScore::from_counts`].
///
/// # Returns
/// A [`MappingScore`] with `score = correct / total`, or `0.0` when the
/// correct map is empty.
pub fn score_mapping(
    student_map: &BTreeMap<String, String>,
    correct_map: &BTreeMap<String, String>,
    case_sensitive: bool,
) -> MappingScore {
    let total = correct_map.len();
    let correct = correct_map
        .iter()
        .filter(|(key, expected)| {
            student_map
                .get(*key)
                .is_some_and(|given| answer_matches(given, expected, &[], case_sensitive, true))
        })
        .count();
    MappingScore::from_counts(correct, total)
}

/// Computes a submission-level percentage from the auto-graded results.
///
/// The overall score is the mean of the per-question fractional scores,
/// rounded to the nearest integer percent. Ungradable questions are excluded
/// before calling this; an empty slice scores 0.
pub fn compute_overall_score(results: &[GradeResult]) -> u32 {
    if results.is_empty() {
        return 0;
    }
    let sum: f64 = results.iter().map(|result| result.score).sum();
    ((sum / results.len() as f64) * 100.0).round() as u32
}
