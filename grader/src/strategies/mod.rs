//! # Strategies
//!
//! One grading strategy per question family, all implementing the
//! [`AnswerStrategy`](crate::traits::strategy::AnswerStrategy) trait:
//!
//! - [`single_choice`]: one selected option, exact normalized equality.
//! - [`multi_choice`]: selected option sets, order-insensitive, all-or-nothing.
//! - [`free_text`]: free text against a primary answer and accepted variants.
//! - [`mapping`]: flat `{blanks}`/`{matches}` maps with partial credit.
//! - [`structured_blanks`]: per-blank structured records with variants.
//! - [`diagram_labels`]: label maps whose values are a string/structured union.
//!
//! [`for_question_type`] is the explicit allow-list of auto-gradable tags.
//! The writing and speaking families deliberately map to `None`: they are
//! graded by a separate AI-assisted path, and any new essay-like tag defaults
//! to ungradable instead of silently matching a strategy.

pub mod diagram_labels;
pub mod free_text;
pub mod mapping;
pub mod multi_choice;
pub mod single_choice;
pub mod structured_blanks;

use serde::Deserialize;
use serde_json::Value;
use util::question_type::QuestionType;

use crate::error::GradeError;
use crate::traits::strategy::AnswerStrategy;

use self::diagram_labels::DiagramLabelsStrategy;
use self::free_text::FreeTextStrategy;
use self::mapping::MappingStrategy;
use self::multi_choice::MultiChoiceStrategy;
use self::single_choice::SingleChoiceStrategy;
use self::structured_blanks::StructuredBlanksStrategy;

/// Maps an auto-gradable question type to its strategy.
///
/// Returns `None` for the manually graded writing/speaking tags.
pub fn for_question_type(question_type: QuestionType) -> Option<&'static dyn AnswerStrategy> {
    match question_type {
        QuestionType::MultipleChoice
        | QuestionType::TrueFalseNotGiven
        | QuestionType::YesNoNotGiven => Some(&SingleChoiceStrategy),
        QuestionType::MultipleChoiceMultiple => Some(&MultiChoiceStrategy),
        QuestionType::SentenceCompletion
        | QuestionType::ShortAnswer
        | QuestionType::SummaryCompletion => Some(&FreeTextStrategy),
        QuestionType::SummaryCompletionWordBank
        | QuestionType::MatchingHeadings
        | QuestionType::MatchingInformation
        | QuestionType::MatchingFeatures
        | QuestionType::MatchingSentenceEndings => Some(&MappingStrategy),
        QuestionType::NoteCompletion
        | QuestionType::TableCompletion
        | QuestionType::FlowChartCompletion => Some(&StructuredBlanksStrategy),
        QuestionType::DiagramLabelCompletion => Some(&DiagramLabelsStrategy),
        QuestionType::WritingTask1
        | QuestionType::WritingTask2
        | QuestionType::SpeakingPart1
        | QuestionType::SpeakingPart2
        | QuestionType::SpeakingPart3 => None,
    }
}

/// Decodes a payload into a typed shape, labelling the failure with which
/// side of the comparison was malformed.
pub(crate) fn decode<'de, T: Deserialize<'de>>(
    payload: &'de Value,
    what: &str,
) -> Result<T, GradeError> {
    T::deserialize(payload).map_err(|err| GradeError::MalformedPayload(format!("{what}: {err}")))
}
