//! # Grader Library
//!
//! This crate provides the core logic for automatic grading of exercise
//! answers. It decides whether a student's answer to a question is correct,
//! and with what partial-credit score, across the platform's auto-gradable
//! question types: multiple choice, true/false/not-given, free text with
//! accepted synonyms, word-bank fill-in, the matching families, structured
//! note/table/flowchart blanks, and diagram labelling.
//!
//! ## Key Concepts
//! - **Dispatcher**: [`grade`] selects a strategy from the question's type
//!   and returns a [`GradeResult`], or `None` when the answer is ungradable.
//! - **Strategies**: pluggable per-family graders behind the
//!   [`AnswerStrategy`](traits::strategy::AnswerStrategy) trait.
//! - **Primitives**: text normalization, single-answer matching and
//!   partial-credit scoring in [`utilities`], [`matcher`] and [`scorer`].
//! - **Reports**: [`report`] grades a whole submission's answers and
//!   assembles a serializable summary for the caller to persist.
//!
//! Every function here is pure and synchronous: no I/O, no shared state.
//! Callers may grade answers in any order or in parallel. An ungradable
//! answer (missing payload, essay-type question, malformed shape) yields
//! `None`, meaning "not yet graded", rather than an error, because one bad
//! entry must never block the rest of a submission.

pub mod error;
pub mod matcher;
pub mod report;
pub mod scorer;
pub mod strategies;
pub mod traits;
pub mod types;
pub mod utilities;

use serde_json::Value;
use tracing::{debug, warn};
use util::question_type::QuestionType;

pub use crate::types::{GradeResult, MappingScore};

/// Grades one answer.
///
/// # Arguments
/// * `question_type` - The question's declared type.
/// * `student_answer` - The student's JSON payload.
/// * `correct_answer` - The teacher's JSON payload.
/// * `case_sensitive` - The exercise-level case policy.
///
/// # Returns
/// * `Some(GradeResult)` when the answer was auto-graded.
/// * `None` when it cannot be: either payload is null, the type is not
///   auto-gradable (writing/speaking go to the AI-assisted path), or the
///   payload shape is malformed. Callers treat `None` as "leave the existing
///   score untouched" and may route the question to manual review.
pub fn grade(
    question_type: QuestionType,
    student_answer: &Value,
    correct_answer: &Value,
    case_sensitive: bool,
) -> Option<GradeResult> {
    if student_answer.is_null() || correct_answer.is_null() {
        return None;
    }

    let Some(strategy) = strategies::for_question_type(question_type) else {
        debug!(
            question_type = question_type.as_tag(),
            "question type is not auto-gradable"
        );
        return None;
    };

    match strategy.grade(student_answer, correct_answer, case_sensitive) {
        Ok(result) => Some(result),
        Err(err) => {
            warn!(
                question_type = question_type.as_tag(),
                error = %err,
                "answer could not be auto-graded"
            );
            None
        }
    }
}

/// Grades one answer from the raw string tag the caller stores.
///
/// Unknown tags yield `None` like any other ungradable input, so rows
/// written by a newer schema degrade to "pending review" instead of failing.
pub fn grade_tag(
    question_type_tag: &str,
    student_answer: &Value,
    correct_answer: &Value,
    case_sensitive: bool,
) -> Option<GradeResult> {
    let Some(question_type) = QuestionType::from_tag(question_type_tag) else {
        warn!(tag = question_type_tag, "unknown question type tag");
        return None;
    };
    grade(question_type, student_answer, correct_answer, case_sensitive)
}
