//! Question descriptors
//!
//! A `Question` is immutable configuration: it is either compiled into a flow
//! or decoded from the backend's question catalog.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{Result, WizardError};

/// Kind of input a question collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free text
    Text,
    /// Number, edited as text and coerced at submission
    #[serde(alias = "numeric")]
    Number,
    /// Free-form deduplicated tags typed by the user
    Chips,
    /// Exactly one of `options`
    #[serde(alias = "single_choice")]
    Single,
    /// Any subset of `options`
    #[serde(alias = "multiple", alias = "multi_choice")]
    Multi,
}

impl QuestionKind {
    /// Answers are a set of strings rather than one string
    pub fn is_multi_valued(self) -> bool {
        matches!(self, QuestionKind::Chips | QuestionKind::Multi)
    }

    /// Answers must be picked from `options`
    pub fn has_options(self) -> bool {
        matches!(self, QuestionKind::Single | QuestionKind::Multi)
    }
}

/// Heading shared by consecutive questions (one discover "test")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// One-line mood text shown under the title
    #[serde(default)]
    pub caption: Option<String>,
}

/// Catalog ids arrive as strings or plain integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Decode an id given either as a JSON string or a JSON number
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// A single step of a wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "label", alias = "text")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Refuse to advance past this question while it is unanswered
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            options: Vec::new(),
            placeholder: None,
            required: false,
            section: None,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn in_section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }
}

/// Check that a question list can drive a wizard.
///
/// Rejects an empty list, blank or duplicate ids, and choice questions
/// without options.
pub fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(WizardError::Configuration(
            "at least one question is required".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        if question.id.trim().is_empty() {
            return Err(WizardError::Configuration(format!(
                "question #{} has an empty id",
                index + 1
            )));
        }
        if !seen.insert(question.id.as_str()) {
            return Err(WizardError::Configuration(format!(
                "duplicate question id '{}'",
                question.id
            )));
        }
        if question.kind.has_options() && question.options.is_empty() {
            return Err(WizardError::Configuration(format!(
                "choice question '{}' has no options",
                question.id
            )));
        }
    }

    Ok(())
}
