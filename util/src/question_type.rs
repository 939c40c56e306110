//! The closed enumeration of question types.
//!
//! Every question stored by the platform carries one of these tags. The tag
//! decides which correct-answer shape the authoring UI produces and which
//! grading strategy (if any) applies when a submission is finalized. The
//! writing and speaking tags are listed here for completeness but are never
//! auto-graded; the engine keeps its own allow-list so that a new essay-like
//! tag added to this enum defaults to "ungradable" rather than silently
//! matching a strategy.

use serde::{Deserialize, Serialize};

/// A question's declared type, stored as a SCREAMING_SNAKE_CASE string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalseNotGiven,
    YesNoNotGiven,
    MultipleChoiceMultiple,
    SentenceCompletion,
    ShortAnswer,
    SummaryCompletion,
    SummaryCompletionWordBank,
    MatchingHeadings,
    MatchingInformation,
    MatchingFeatures,
    MatchingSentenceEndings,
    NoteCompletion,
    TableCompletion,
    FlowChartCompletion,
    DiagramLabelCompletion,
    #[serde(rename = "WRITING_TASK_1")]
    WritingTask1,
    #[serde(rename = "WRITING_TASK_2")]
    WritingTask2,
    #[serde(rename = "SPEAKING_PART_1")]
    SpeakingPart1,
    #[serde(rename = "SPEAKING_PART_2")]
    SpeakingPart2,
    #[serde(rename = "SPEAKING_PART_3")]
    SpeakingPart3,
}

/// Groups of question types that share an answer shape and grading approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionFamily {
    /// One selected option: `{ "answer": string }`.
    SingleChoice,
    /// Several selected options: `{ "answers": string[] }`.
    MultiChoice,
    /// Free text with accepted variants: `{ "answer", "acceptedVariants" }`.
    FreeText,
    /// Flat string-to-string maps: `{ "blanks" }` or `{ "matches" }`.
    Mapping,
    /// Per-blank structured records: `{ "blanks": { key: StructuredBlank } }`.
    StructuredBlanks,
    /// Diagram labels, bare string or structured per key: `{ "labels" }`.
    DiagramLabels,
    /// Writing and speaking tasks, graded outside the engine.
    ManuallyGraded,
}

impl QuestionType {
    /// Every variant, in declaration order. Handy for exhaustive checks.
    pub const ALL: [QuestionType; 21] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalseNotGiven,
        QuestionType::YesNoNotGiven,
        QuestionType::MultipleChoiceMultiple,
        QuestionType::SentenceCompletion,
        QuestionType::ShortAnswer,
        QuestionType::SummaryCompletion,
        QuestionType::SummaryCompletionWordBank,
        QuestionType::MatchingHeadings,
        QuestionType::MatchingInformation,
        QuestionType::MatchingFeatures,
        QuestionType::MatchingSentenceEndings,
        QuestionType::NoteCompletion,
        QuestionType::TableCompletion,
        QuestionType::FlowChartCompletion,
        QuestionType::DiagramLabelCompletion,
        QuestionType::WritingTask1,
        QuestionType::WritingTask2,
        QuestionType::SpeakingPart1,
        QuestionType::SpeakingPart2,
        QuestionType::SpeakingPart3,
    ];

    /// The string tag this type is stored under.
    pub fn as_tag(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::TrueFalseNotGiven => "TRUE_FALSE_NOT_GIVEN",
            QuestionType::YesNoNotGiven => "YES_NO_NOT_GIVEN",
            QuestionType::MultipleChoiceMultiple => "MULTIPLE_CHOICE_MULTIPLE",
            QuestionType::SentenceCompletion => "SENTENCE_COMPLETION",
            QuestionType::ShortAnswer => "SHORT_ANSWER",
            QuestionType::SummaryCompletion => "SUMMARY_COMPLETION",
            QuestionType::SummaryCompletionWordBank => "SUMMARY_COMPLETION_WORD_BANK",
            QuestionType::MatchingHeadings => "MATCHING_HEADINGS",
            QuestionType::MatchingInformation => "MATCHING_INFORMATION",
            QuestionType::MatchingFeatures => "MATCHING_FEATURES",
            QuestionType::MatchingSentenceEndings => "MATCHING_SENTENCE_ENDINGS",
            QuestionType::NoteCompletion => "NOTE_COMPLETION",
            QuestionType::TableCompletion => "TABLE_COMPLETION",
            QuestionType::FlowChartCompletion => "FLOW_CHART_COMPLETION",
            QuestionType::DiagramLabelCompletion => "DIAGRAM_LABEL_COMPLETION",
            QuestionType::WritingTask1 => "WRITING_TASK_1",
            QuestionType::WritingTask2 => "WRITING_TASK_2",
            QuestionType::SpeakingPart1 => "SPEAKING_PART_1",
            QuestionType::SpeakingPart2 => "SPEAKING_PART_2",
            QuestionType::SpeakingPart3 => "SPEAKING_PART_3",
        }
    }

    /// Parses a stored tag. Unknown tags yield `None` rather than an error so
    /// that rows written by a newer schema stay readable.
    pub fn from_tag(tag: &str) -> Option<QuestionType> {
        QuestionType::ALL
            .iter()
            .copied()
            .find(|question_type| question_type.as_tag() == tag)
    }

    /// The shape/grading family this type belongs to.
    pub fn family(&self) -> QuestionFamily {
        match self {
            QuestionType::MultipleChoice
            | QuestionType::TrueFalseNotGiven
            | QuestionType::YesNoNotGiven => QuestionFamily::SingleChoice,
            QuestionType::MultipleChoiceMultiple => QuestionFamily::MultiChoice,
            QuestionType::SentenceCompletion
            | QuestionType::ShortAnswer
            | QuestionType::SummaryCompletion => QuestionFamily::FreeText,
            QuestionType::SummaryCompletionWordBank
            | QuestionType::MatchingHeadings
            | QuestionType::MatchingInformation
            | QuestionType::MatchingFeatures
            | QuestionType::MatchingSentenceEndings => QuestionFamily::Mapping,
            QuestionType::NoteCompletion
            | QuestionType::TableCompletion
            | QuestionType::FlowChartCompletion => QuestionFamily::StructuredBlanks,
            QuestionType::DiagramLabelCompletion => QuestionFamily::DiagramLabels,
            QuestionType::WritingTask1
            | QuestionType::WritingTask2
            | QuestionType::SpeakingPart1
            | QuestionType::SpeakingPart2
            | QuestionType::SpeakingPart3 => QuestionFamily::ManuallyGraded,
        }
    }
}
