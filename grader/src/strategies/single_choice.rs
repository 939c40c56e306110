//! Grading for the single-choice family (MCQ-single, TFNG, YNNG).
//!
//! Both payloads are `{ "answer": string }`. The selected option matches
//! under normalized equality with strict word order; there is no partial
//! credit.

use serde_json::Value;
use util::answer::ChoiceAnswer;

use crate::error::GradeError;
use crate::matcher::answer_matches;
use crate::strategies::decode;
use crate::traits::strategy::AnswerStrategy;
use crate::types::GradeResult;

pub struct SingleChoiceStrategy;

impl AnswerStrategy for SingleChoiceStrategy {
    fn grade(
        &self,
        student_answer: &Value,
        correct_answer: &Value,
        case_sensitive: bool,
    ) -> Result<GradeResult, GradeError> {
        let student: ChoiceAnswer = decode(student_answer, "student answer")?;
        let correct: ChoiceAnswer = decode(correct_answer, "correct answer")?;
        let matched = answer_matches(&student.answer, &correct.answer, &[], case_sensitive, true);
        Ok(GradeResult::all_or_nothing(matched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matching_option() {
        let result = SingleChoiceStrategy
            .grade(&json!({ "answer": " b " }), &json!({ "answer": "B" }), false)
            .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_wrong_option() {
        let result = SingleChoiceStrategy
            .grade(&json!({ "answer": "A" }), &json!({ "answer": "B" }), false)
            .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_case_sensitivity_applies() {
        let result = SingleChoiceStrategy
            .grade(
                &json!({ "answer": "true" }),
                &json!({ "answer": "TRUE" }),
                true,
            )
            .unwrap();
        assert!(!result.is_correct);
    }

    #[test]
    fn test_missing_answer_field_is_an_error() {
        let err = SingleChoiceStrategy
            .grade(&json!({}), &json!({ "answer": "B" }), false)
            .unwrap_err();
        assert!(matches!(err, GradeError::MalformedPayload(_)));
    }
}
