//! Single-answer matching.
//!
//! This is the primitive every text-based strategy reduces to: compare one
//! student string against one correct string (and its accepted variants)
//! under the exercise's case-sensitivity policy and the answer's word-order
//! policy.
//!
//! Word-order-insensitive comparison is multiset equality over tokens, not
//! set equality: `"the the cat"` does **not** match `"the cat"` because the
//! token counts differ.

use crate::utilities::text::{normalize_for_match, normalize_for_store};

/// Canonical comparison form of a string. Trimming and whitespace collapsing
/// always apply; lowercasing only when the exercise is case-insensitive.
pub fn canonical(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        normalize_for_store(text)
    } else {
        normalize_for_match(text)
    }
}

/// Checks a student answer against a correct answer and its accepted
/// variants.
///
/// # Arguments
/// * `student` - The student's raw answer text.
/// * `correct` - The primary correct answer.
/// * `accepted_variants` - Alternative correct spellings, tried in order
///   after the primary answer fails.
/// * `case_sensitive` - The exercise-level case policy.
/// * `strict_word_order` - When true, tokens must appear in the same order;
///   when false, comparison is order-invariant but still count-sensitive.
///   Callers without a stored per-answer value default this to `true`.
///
/// Two empty strings match trivially under either mode.
pub fn answer_matches(
    student: &str,
    correct: &str,
    accepted_variants: &[String],
    case_sensitive: bool,
    strict_word_order: bool,
) -> bool {
    let student = canonical(student, case_sensitive);

    let matches_candidate = |candidate: &str| {
        let candidate = canonical(candidate, case_sensitive);
        if strict_word_order {
            student == candidate
        } else {
            let mut student_tokens: Vec<&str> = student.split_whitespace().collect();
            let mut candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();
            student_tokens.sort_unstable();
            candidate_tokens.sort_unstable();
            student_tokens == candidate_tokens
        }
    };

    matches_candidate(correct)
        || accepted_variants
            .iter()
            .any(|variant| matches_candidate(variant))
}
