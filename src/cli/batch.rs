//! Non-interactive runs driven by an answer file
//!
//! The file is a JSON object keyed by question id. Values are strings,
//! numbers, or lists of strings. Answers go through the same transitions the
//! interactive wizard uses, so required questions and numeric coercion behave
//! identically.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::{self, ValidationError, WizardError, WizardState};
use crate::remote::Evaluator;

/// One value from the answer file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnswerInput {
    Text(String),
    Number(serde_json::Number),
    List(Vec<String>),
}

pub type AnswerFile = BTreeMap<String, AnswerInput>;

pub fn load_answer_file(path: &Path) -> Result<AnswerFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse answer file: {}", path.display()))
}

/// Apply every answer from the file.
///
/// Lists are added value by value to chip and multi-choice questions, so
/// duplicates collapse. A list given for a single-valued question is
/// rejected.
pub fn apply_answers<R: Clone>(
    state: &WizardState<R>,
    answers: &AnswerFile,
) -> engine::Result<WizardState<R>> {
    let mut state = state.clone();

    for (id, input) in answers {
        let question = state
            .questions()
            .iter()
            .find(|q| &q.id == id)
            .ok_or_else(|| WizardError::from(ValidationError::UnknownQuestion(id.clone())))?;
        let multi = question.kind.is_multi_valued();

        state = match input {
            AnswerInput::Text(text) if multi => state.add_chip(id, text)?,
            AnswerInput::Text(text) => state.set_answer(id, text)?,
            AnswerInput::Number(number) => state.set_answer(id, &number.to_string())?,
            AnswerInput::List(values) if multi => {
                let mut next = state;
                for value in values {
                    next = next.add_chip(id, value)?;
                }
                next
            }
            AnswerInput::List(_) => {
                return Err(WizardError::from(ValidationError::NotMultiValued(id.clone())))
            }
        };
    }

    Ok(state)
}

/// Walk to the last question and submit.
///
/// Required questions are checked on the way, exactly as when the user
/// presses Next.
pub async fn run_batch<E>(
    state: &WizardState<E::Output>,
    evaluator: &E,
) -> engine::Result<WizardState<E::Output>>
where
    E: Evaluator + ?Sized,
    E::Output: Clone,
{
    let mut state = state.clone();
    while state.current_index() + 1 < state.question_count() {
        state = state.go_next()?;
    }
    state.submit(evaluator).await
}
