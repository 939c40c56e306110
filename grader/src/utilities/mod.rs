//! # Utilities
//!
//! Leaf helpers shared by the grading strategies and by collaborators outside
//! the engine:
//! - [`text`]: whitespace/case normalization and the word-limit check.
//! - [`migration`]: legacy answer-map upgrades and the save-time
//!   normalization gate for correct-answer payloads.

pub mod migration;
pub mod text;
