//! Grading for the multi-choice family (MCQ with several correct options).
//!
//! Each selection is normalized, both sides are sorted, and the sequences
//! must be pairwise equal: order never matters but a missing or extra
//! selection fails. All-or-nothing; the
//! author-side `maxSelections` field is UI metadata and is ignored here.

use serde_json::Value;
use util::answer::{MultiChoiceCorrect, MultiChoiceStudent};

use crate::error::GradeError;
use crate::matcher::canonical;
use crate::strategies::decode;
use crate::traits::strategy::AnswerStrategy;
use crate::types::GradeResult;

pub struct MultiChoiceStrategy;

impl AnswerStrategy for MultiChoiceStrategy {
    fn grade(
        &self,
        student_answer: &Value,
        correct_answer: &Value,
        case_sensitive: bool,
    ) -> Result<GradeResult, GradeError> {
        let student: MultiChoiceStudent = decode(student_answer, "student answer")?;
        let correct: MultiChoiceCorrect = decode(correct_answer, "correct answer")?;

        let mut student_set: Vec<String> = student
            .answers
            .iter()
            .map(|option| canonical(option, case_sensitive))
            .collect();
        let mut correct_set: Vec<String> = correct
            .answers
            .iter()
            .map(|option| canonical(option, case_sensitive))
            .collect();
        student_set.sort_unstable();
        correct_set.sort_unstable();

        Ok(GradeResult::all_or_nothing(student_set == correct_set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_does_not_matter() {
        let result = MultiChoiceStrategy
            .grade(
                &json!({ "answers": ["C", "A"] }),
                &json!({ "answers": ["A", "C"] }),
                false,
            )
            .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_wrong_selection_scores_zero() {
        let result = MultiChoiceStrategy
            .grade(
                &json!({ "answers": ["A", "B"] }),
                &json!({ "answers": ["A", "C"] }),
                false,
            )
            .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_subset_is_not_enough() {
        let result = MultiChoiceStrategy
            .grade(
                &json!({ "answers": ["A"] }),
                &json!({ "answers": ["A", "C"] }),
                false,
            )
            .unwrap();
        assert!(!result.is_correct);
    }

    #[test]
    fn test_max_selections_is_ignored() {
        let result = MultiChoiceStrategy
            .grade(
                &json!({ "answers": ["a", "c"] }),
                &json!({ "answers": ["A", "C"], "maxSelections": 2 }),
                false,
            )
            .unwrap();
        assert!(result.is_correct);
    }

    #[test]
    fn test_missing_answers_default_to_empty() {
        // An empty student payload is readable; it only matches an empty
        // correct set.
        let against_empty = MultiChoiceStrategy
            .grade(&json!({}), &json!({ "answers": [] }), false)
            .unwrap();
        assert!(against_empty.is_correct);

        let against_options = MultiChoiceStrategy
            .grade(&json!({}), &json!({ "answers": ["A"] }), false)
            .unwrap();
        assert!(!against_options.is_correct);
    }
}
