//! Grading error types.
//!
//! These errors are internal to the engine: every one of them is caught at
//! the dispatcher boundary in [`crate::grade`] and folded into a `None`
//! ("ungradable") result, because one malformed answer must never abort
//! grading of the rest of a submission. They exist so strategies can report
//! *why* a payload was ungradable to the logs.

/// Errors raised while decoding or grading a single answer payload.
#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    /// The payload is not valid for its declared shape (serde-level failure).
    #[error("malformed answer payload ({0})")]
    MalformedPayload(String),

    /// A required top-level field is entirely absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The payload's overall shape does not match the question family.
    #[error("answer shape does not match question family: {0}")]
    ShapeMismatch(String),
}
