//! Shared schema types for the grading system.
//!
//! This crate holds the data contract between the grading engine and its
//! collaborators (question authoring, submission finalization, data
//! migration): the closed [`question_type::QuestionType`] enumeration and the
//! serde-typed answer payload shapes in [`answer`].
//!
//! Nothing in here performs grading; keeping the schema separate lets callers
//! that only read or persist answers depend on these types without pulling in
//! the engine.

pub mod answer;
pub mod question_type;
