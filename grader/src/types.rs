//! # Types Module
//!
//! Core result types shared across the grading engine: the per-question
//! [`GradeResult`] returned by every strategy, and the [`MappingScore`]
//! breakdown produced for the partial-credit families.

use serde::{Deserialize, Serialize};

/// The outcome of grading a single answer.
///
/// `score` is a fraction in `[0, 1]`. For all-or-nothing families it is
/// exactly `0.0` or `1.0`; for the mapping families it is the share of
/// correct sub-parts. `is_correct` is true only for a full score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub is_correct: bool,
    pub score: f64,
}

impl GradeResult {
    /// All-or-nothing result from a boolean match.
    pub fn all_or_nothing(matched: bool) -> Self {
        GradeResult {
            is_correct: matched,
            score: if matched { 1.0 } else { 0.0 },
        }
    }

    /// Partial-credit result from a mapping breakdown. Correct means every
    /// sub-part matched, which an empty correct map can never satisfy.
    pub fn partial(breakdown: MappingScore) -> Self {
        GradeResult {
            is_correct: breakdown.total > 0 && breakdown.correct == breakdown.total,
            score: breakdown.score,
        }
    }
}

/// The breakdown of a partial-credit comparison over a keyed answer map.
///
/// `total` is the number of keys in the teacher's correct map, which is the
/// authoritative key set. `correct` counts the keys the student matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingScore {
    pub correct: usize,
    pub total: usize,
    pub score: f64,
}

impl MappingScore {
    /// Builds the breakdown from counts, guarding the empty-map case.
    pub fn from_counts(correct: usize, total: usize) -> Self {
        let score = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };
        MappingScore {
            correct,
            total,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_or_nothing() {
        assert_eq!(
            GradeResult::all_or_nothing(true),
            GradeResult {
                is_correct: true,
                score: 1.0
            }
        );
        assert_eq!(
            GradeResult::all_or_nothing(false),
            GradeResult {
                is_correct: false,
                score: 0.0
            }
        );
    }

    #[test]
    fn test_partial_requires_full_total() {
        let result = GradeResult::partial(MappingScore::from_counts(2, 3));
        assert!(!result.is_correct);
        assert!((result.score - 2.0 / 3.0).abs() < 1e-12);

        let full = GradeResult::partial(MappingScore::from_counts(3, 3));
        assert!(full.is_correct);
        assert_eq!(full.score, 1.0);
    }

    #[test]
    fn test_empty_mapping_is_never_correct() {
        let result = GradeResult::partial(MappingScore::from_counts(0, 0));
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let value = serde_json::to_value(GradeResult::all_or_nothing(true)).unwrap();
        assert_eq!(value["isCorrect"], true);
        assert_eq!(value["score"], 1.0);
    }
}
