//! # Submission Report Module
//!
//! Convenience layer over the per-answer dispatcher: grades every answerable
//! question of a submission and assembles a serializable summary the caller
//! persists and returns to clients.
//!
//! The engine stays pure here: the caller loads the submission's answers
//! and the exercise's questions, hands them over as JSON, and writes the
//! report back itself. Questions the dispatcher cannot grade are marked
//! `pending_review` and excluded from the overall score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scorer::compute_overall_score;
use crate::types::GradeResult;

/// One answered question as the submission-finalization caller fetched it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub question_number: i64,
    /// The stored question type tag, e.g. `"MATCHING_HEADINGS"`.
    pub question_type: String,
    pub student_answer: Value,
    pub correct_answer: Value,
}

/// Whether a question was auto-graded or needs manual/AI review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    Graded,
    PendingReview,
}

/// The per-question line of a [`SubmissionReport`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReport {
    pub question_number: i64,
    pub status: GradeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GradeResult>,
}

/// The grading summary for one submission.
///
/// `overall_score` is a 0-100 percentage over the auto-graded questions
/// only; `pending` counts the questions left for manual or AI review.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<QuestionReport>,
    pub graded: usize,
    pub pending: usize,
    pub overall_score: u32,
}

/// Grades each entry independently and assembles the submission summary.
///
/// Entries are independent: a malformed or essay-type entry becomes
/// `pending_review` without affecting its neighbours.
pub fn grade_submission(entries: &[AnswerEntry], case_sensitive: bool) -> SubmissionReport {
    let mut results = Vec::with_capacity(entries.len());
    let mut graded_results = Vec::new();

    for entry in entries {
        let result = crate::grade_tag(
            &entry.question_type,
            &entry.student_answer,
            &entry.correct_answer,
            case_sensitive,
        );
        let status = match result {
            Some(graded) => {
                graded_results.push(graded);
                GradeStatus::Graded
            }
            None => GradeStatus::PendingReview,
        };
        results.push(QuestionReport {
            question_number: entry.question_number,
            status,
            result,
        });
    }

    SubmissionReport {
        generated_at: Utc::now(),
        graded: graded_results.len(),
        pending: results.len() - graded_results.len(),
        overall_score: compute_overall_score(&graded_results),
        results,
    }
}
