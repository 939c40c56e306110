//! Grading for the free-text family (sentence completion, short answer,
//! summary completion from the passage).
//!
//! The correct payload carries a primary answer plus accepted variants; the
//! student's text is tried against the primary first, then each variant in
//! order. Word-order strictness is declared per answer and defaults to
//! strict when the stored field is absent.

use serde_json::Value;
use util::answer::{ChoiceAnswer, TextCorrect};

use crate::error::GradeError;
use crate::matcher::answer_matches;
use crate::strategies::decode;
use crate::traits::strategy::AnswerStrategy;
use crate::types::GradeResult;

pub struct FreeTextStrategy;

impl AnswerStrategy for FreeTextStrategy {
    fn grade(
        &self,
        student_answer: &Value,
        correct_answer: &Value,
        case_sensitive: bool,
    ) -> Result<GradeResult, GradeError> {
        let student: ChoiceAnswer = decode(student_answer, "student answer")?;
        let correct: TextCorrect = decode(correct_answer, "correct answer")?;
        let matched = answer_matches(
            &student.answer,
            &correct.answer,
            &correct.accepted_variants,
            case_sensitive,
            correct.strict_word_order.unwrap_or(true),
        );
        Ok(GradeResult::all_or_nothing(matched))
    }
}
