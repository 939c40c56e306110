//! Grading for the structured-blank family (note, table and flowchart
//! completion).
//!
//! The teacher's map holds a [`StructuredBlank`] per key. Rows written
//! before the structured shape existed hold a bare string instead, which
//! upgrades to one on read. Each blank resolves against its own answer, accepted
//! variants and word-order flag; the per-key results aggregate with the same
//! correct/total formula as the flat mapping scorer.

use serde_json::Value;
use util::answer::{StructuredBlank, StructuredBlankMap, StudentBlankMap};

use crate::error::GradeError;
use crate::matcher::answer_matches;
use crate::strategies::decode;
use crate::traits::strategy::AnswerStrategy;
use crate::types::{GradeResult, MappingScore};

pub struct StructuredBlanksStrategy;

/// One blank: the student's text against the resolved structured record.
fn blank_matches(given: &str, blank: &StructuredBlank, case_sensitive: bool) -> bool {
    answer_matches(
        given,
        &blank.answer,
        &blank.accepted_variants,
        case_sensitive,
        blank.strict_word_order,
    )
}

impl AnswerStrategy for StructuredBlanksStrategy {
    fn grade(
        &self,
        student_answer: &Value,
        correct_answer: &Value,
        case_sensitive: bool,
    ) -> Result<GradeResult, GradeError> {
        let student: StudentBlankMap = decode(student_answer, "student answer")?;
        let correct: StructuredBlankMap = decode(correct_answer, "correct answer")?;

        let total = correct.blanks.len();
        let matched = correct
            .blanks
            .iter()
            .filter(|(key, value)| {
                let blank = (*value).clone().into_structured();
                student
                    .blanks
                    .get(*key)
                    .is_some_and(|given| blank_matches(given, &blank, case_sensitive))
            })
            .count();

        Ok(GradeResult::partial(MappingScore::from_counts(
            matched, total,
        )))
    }
}
