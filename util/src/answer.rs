//! Serde-typed answer payload shapes.
//!
//! Correct answers are authored by teachers and persisted as JSON; student
//! answers are produced by the submission flow. Both sides are deserialized
//! into the types below at grading time. Field names are camelCase on the
//! wire because the same JSON is consumed by the web clients.
//!
//! Optional sub-fields default (`acceptedVariants` to an empty list,
//! `strictWordOrder` to `true`) so that rows written before a field existed
//! deserialize cleanly. A missing *required* field is a serde error, which
//! the engine treats as "ungradable" rather than a crash.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_strict_word_order() -> bool {
    true
}

/// The canonical per-blank correct-answer record used by the structured-blank
/// and diagram-label families: a primary answer, its accepted variants, and
/// whether word order is enforced when comparing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredBlank {
    pub answer: String,
    #[serde(default)]
    pub accepted_variants: Vec<String>,
    #[serde(default = "default_strict_word_order")]
    pub strict_word_order: bool,
}

impl StructuredBlank {
    /// A blank with no variants and strict word order, the shape a legacy
    /// flat-string value upgrades to.
    pub fn plain(answer: impl Into<String>) -> Self {
        StructuredBlank {
            answer: answer.into(),
            accepted_variants: Vec::new(),
            strict_word_order: true,
        }
    }
}

/// A correct-answer value that is either a legacy bare string or a
/// [`StructuredBlank`]. The stored shape evolved from flat strings to
/// structured records; both must stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Structured(StructuredBlank),
}

impl TextValue {
    /// Upgrades to the structured shape. Bare strings get an empty variant
    /// list and strict word order; structured values pass through unchanged.
    pub fn into_structured(self) -> StructuredBlank {
        match self {
            TextValue::Plain(answer) => StructuredBlank::plain(answer),
            TextValue::Structured(blank) => blank,
        }
    }
}

/// `{ "answer": string }`: single-choice payloads (both sides) and the
/// student side of every free-text family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceAnswer {
    pub answer: String,
}

/// Teacher-authored multi-choice payload. `maxSelections` constrains the
/// student UI and is ignored by grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceCorrect {
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,
}

/// Student multi-choice payload: the set of selected options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceStudent {
    #[serde(default)]
    pub answers: Vec<String>,
}

/// Teacher-authored free-text payload. `strictWordOrder` is optional here;
/// when absent the matcher's default of `true` applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCorrect {
    pub answer: String,
    #[serde(default)]
    pub accepted_variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_word_order: Option<bool>,
}

/// Teacher side of the structured-blank families (note/table/flowchart):
/// one [`TextValue`] per blank key, so legacy flat rows still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredBlankMap {
    pub blanks: BTreeMap<String, TextValue>,
}

/// Student side of the structured-blank families: flat strings per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentBlankMap {
    #[serde(default)]
    pub blanks: BTreeMap<String, String>,
}

/// Teacher side of the diagram-label family. Values are a union of bare
/// string and [`StructuredBlank`] per label key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelMap {
    pub labels: BTreeMap<String, TextValue>,
}

/// Student side of the diagram-label family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLabelMap {
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}
