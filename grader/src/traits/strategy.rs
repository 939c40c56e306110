use serde_json::Value;

use crate::error::GradeError;
use crate::types::GradeResult;

/// AnswerStrategy is a strategy trait for grading one answered question.
/// Each implementation covers one question family's payload shapes.
pub trait AnswerStrategy: Send + Sync {
    /// Grade one student payload against one correct payload.
    ///
    /// - `student_answer`: the student's JSON payload, never normalized at
    ///   save time, only here at comparison time.
    /// - `correct_answer`: the teacher's JSON payload, already store-normalized.
    /// - `case_sensitive`: the exercise-level case policy, applied uniformly
    ///   to every comparison this strategy performs.
    ///
    /// Returns an error when a payload does not decode for this family; the
    /// dispatcher folds that into an "ungradable" result.
    fn grade(
        &self,
        student_answer: &Value,
        correct_answer: &Value,
        case_sensitive: bool,
    ) -> Result<GradeResult, GradeError>;
}
