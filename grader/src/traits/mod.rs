//! Traits Module
//!
//! Core traits used throughout the grading engine.
//!
//! - [`strategy`]: the strategy trait each question-family grader implements.

pub mod strategy;
