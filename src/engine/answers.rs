//! Collected answers and their conversion into a submission payload

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::error::ValidationError;
use super::question::{Question, QuestionKind};

/// Deduplicated set of selected values.
///
/// Keeps first-insertion order so chips render in the order they were typed,
/// but compares equal regardless of order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ChoiceSet(Vec<String>);

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// Returns false when the value was already present
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    /// Returns false when the value was not present
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|v| v != value);
        self.0.len() != before
    }

    /// Add the value if absent, remove it if present
    pub fn toggle(&mut self, value: &str) {
        if !self.remove(value) {
            self.0.push(value.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl PartialEq for ChoiceSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|v| other.contains(v))
    }
}

impl Eq for ChoiceSet {}

impl From<Vec<String>> for ChoiceSet {
    fn from(values: Vec<String>) -> Self {
        let mut set = ChoiceSet::new();
        for value in values {
            set.insert(value);
        }
        set
    }
}

impl From<ChoiceSet> for Vec<String> {
    fn from(set: ChoiceSet) -> Self {
        set.0
    }
}

impl<S: Into<String>> FromIterator<S> for ChoiceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ChoiceSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// Answer to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Text, raw numeric input, or the picked option of a single-choice question
    One(String),
    /// Chips or multi-choice selections
    Many(ChoiceSet),
}

impl AnswerValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnswerValue::One(s) => Some(s),
            AnswerValue::Many(_) => None,
        }
    }

    pub fn as_set(&self) -> Option<&ChoiceSet> {
        match self {
            AnswerValue::One(_) => None,
            AnswerValue::Many(set) => Some(set),
        }
    }
}

/// Mapping from question id to answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_str)
    }

    pub fn choices(&self, id: &str) -> Option<&ChoiceSet> {
        self.get(id).and_then(AnswerValue::as_set)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn replace(&mut self, id: &str, value: impl Into<String>) {
        self.0.insert(id.to_string(), AnswerValue::One(value.into()));
    }

    /// Edit the set for `id`, replacing a scalar answer if one is stored
    pub(crate) fn update_set<F>(&mut self, id: &str, edit: F)
    where
        F: FnOnce(&mut ChoiceSet),
    {
        let mut set = match self.0.remove(id) {
            Some(AnswerValue::Many(set)) => set,
            _ => ChoiceSet::new(),
        };
        edit(&mut set);
        self.0.insert(id.to_string(), AnswerValue::Many(set));
    }

    /// Whether `question` has a usable answer
    pub fn is_answered(&self, question: &Question) -> bool {
        match self.get(&question.id) {
            Some(AnswerValue::One(s)) => !s.trim().is_empty(),
            Some(AnswerValue::Many(set)) => !set.is_empty(),
            None => false,
        }
    }

    /// Build the JSON body sent to the evaluator.
    ///
    /// Numeric answers are coerced here: blank input is omitted, anything that
    /// does not parse is rejected. Text is always present (possibly empty),
    /// sets are always present (possibly empty), an unpicked single choice is
    /// omitted.
    pub fn to_submission(&self, questions: &[Question]) -> Result<Submission, ValidationError> {
        let mut fields = Map::new();

        for question in questions {
            let answer = self.get(&question.id);
            let value = match question.kind {
                QuestionKind::Text => Some(Value::String(
                    answer.and_then(AnswerValue::as_str).unwrap_or("").to_string(),
                )),
                QuestionKind::Number => {
                    let raw = answer.and_then(AnswerValue::as_str).unwrap_or("");
                    coerce_number(&question.id, raw)?.map(Value::Number)
                }
                QuestionKind::Single => answer
                    .and_then(AnswerValue::as_str)
                    .filter(|s| !s.is_empty())
                    .map(|s| Value::String(s.to_string())),
                QuestionKind::Chips | QuestionKind::Multi => Some(Value::Array(
                    answer
                        .and_then(AnswerValue::as_set)
                        .map(|set| set.iter().map(|v| Value::String(v.to_string())).collect())
                        .unwrap_or_default(),
                )),
            };

            if let Some(value) = value {
                fields.insert(question.id.clone(), value);
            }
        }

        Ok(Submission(fields))
    }
}

/// Parse raw numeric input; `None` means the field is omitted
fn coerce_number(question: &str, raw: &str) -> Result<Option<Number>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(Some(Number::from(int)));
    }

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Some)
        .ok_or_else(|| ValidationError::NotANumber {
            question: question.to_string(),
            value: raw.to_string(),
        })
}

/// Coerced answer payload, keyed by question id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Submission(Map<String, Value>);

impl Submission {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.get(id)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
