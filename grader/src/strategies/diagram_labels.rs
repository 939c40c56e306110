//! Grading for diagram labelling.
//!
//! The teacher's `labels` map is a union per key: a bare string means plain
//! normalized equality, a structured record means the same variant and
//! word-order resolution as the structured-blank family. Aggregation is
//! identical partial credit.

use serde_json::Value;
use util::answer::{LabelMap, StudentLabelMap, TextValue};

use crate::error::GradeError;
use crate::matcher::answer_matches;
use crate::strategies::decode;
use crate::traits::strategy::AnswerStrategy;
use crate::types::{GradeResult, MappingScore};

pub struct DiagramLabelsStrategy;

fn label_matches(given: &str, expected: &TextValue, case_sensitive: bool) -> bool {
    match expected {
        TextValue::Plain(answer) => answer_matches(given, answer, &[], case_sensitive, true),
        TextValue::Structured(blank) => answer_matches(
            given,
            &blank.answer,
            &blank.accepted_variants,
            case_sensitive,
            blank.strict_word_order,
        ),
    }
}

impl AnswerStrategy for DiagramLabelsStrategy {
    fn grade(
        &self,
        student_answer: &Value,
        correct_answer: &Value,
        case_sensitive: bool,
    ) -> Result<GradeResult, GradeError> {
        let student: StudentLabelMap = decode(student_answer, "student answer")?;
        let correct: LabelMap = decode(correct_answer, "correct answer")?;

        let total = correct.labels.len();
        let matched = correct
            .labels
            .iter()
            .filter(|(key, expected)| {
                student
                    .labels
                    .get(*key)
                    .is_some_and(|given| label_matches(given, expected, case_sensitive))
            })
            .count();

        Ok(GradeResult::partial(MappingScore::from_counts(
            matched, total,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_union_of_plain_and_structured_values() {
        let correct = json!({
            "labels": {
                "A": "left ventricle",
                "B": { "answer": "aorta", "acceptedVariants": ["the aorta"] },
            }
        });
        let student = json!({ "labels": { "A": "Left  Ventricle", "B": "the aorta" } });
        let result = DiagramLabelsStrategy
            .grade(&student, &correct, false)
            .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_plain_values_have_no_variants() {
        let correct = json!({ "labels": { "A": "aorta" } });
        let student = json!({ "labels": { "A": "the aorta" } });
        let result = DiagramLabelsStrategy
            .grade(&student, &correct, false)
            .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_partial_credit() {
        let correct = json!({ "labels": { "A": "x", "B": "y", "C": "z", "D": "w" } });
        let student = json!({ "labels": { "A": "x", "B": "nope", "C": "z" } });
        let result = DiagramLabelsStrategy
            .grade(&student, &correct, false)
            .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_case_sensitive_labels() {
        let correct = json!({ "labels": { "A": "Aorta" } });
        let student = json!({ "labels": { "A": "aorta" } });
        assert!(
            DiagramLabelsStrategy
                .grade(&student, &correct, false)
                .unwrap()
                .is_correct
        );
        assert!(
            !DiagramLabelsStrategy
                .grade(&student, &correct, true)
                .unwrap()
                .is_correct
        );
    }

    #[test]
    fn test_missing_labels_field_on_correct_side_is_an_error() {
        let err = DiagramLabelsStrategy
            .grade(&json!({ "labels": {} }), &json!({}), false)
            .unwrap_err();
        assert!(matches!(err, GradeError::MalformedPayload(_)));
    }
}
