//! Pure wizard state machine. No I/O.
//!
//! Every transition borrows the current state and returns a new one, so a
//! failed transition leaves the caller holding the state it started from.
//! The presentation layer renders the latest state and dispatches intents.

use std::sync::Arc;

use tracing::{debug, warn};

use super::answers::{AnswerSet, Submission};
use super::error::{Result, ValidationError, WizardError};
use super::question::{validate_questions, Question};
use crate::remote::Evaluator;

/// Position of the wizard for a "Step i / N" header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// 1-based step, clamped to `total`
    pub step: usize,
    pub total: usize,
    /// "Test k / M" for questions grouped into sections
    pub section: Option<SectionProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    /// 1-based section number
    pub index: usize,
    pub total: usize,
    pub title: String,
    pub caption: Option<String>,
}

/// Questionnaire state, generic over the flow's result payload
#[derive(Debug, Clone)]
pub struct WizardState<R> {
    questions: Arc<[Question]>,
    current_index: usize,
    answers: AnswerSet,
    result: Option<R>,
    is_submitting: bool,
}

impl<R: Clone> WizardState<R> {
    /// Start a wizard over `questions`.
    ///
    /// Fails with `WizardError::Configuration` when the list is empty or
    /// malformed.
    pub fn initialize(questions: Vec<Question>) -> Result<Self> {
        validate_questions(&questions)?;
        Ok(Self {
            questions: questions.into(),
            current_index: 0,
            answers: AnswerSet::new(),
            result: None,
            is_submitting: false,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// `None` once the wizard has moved past the last question
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// The evaluator has answered and the result is available
    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len() && self.result.is_some()
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let step = (self.current_index + 1).min(total);

        let position = self.current_index.min(total.saturating_sub(1));
        let section = self.questions[position].section.as_ref().map(|current| {
            let mut ids: Vec<&str> = Vec::new();
            for q in self.questions.iter() {
                if let Some(s) = &q.section {
                    if !ids.contains(&s.id.as_str()) {
                        ids.push(&s.id);
                    }
                }
            }
            let index = ids.iter().position(|id| *id == current.id).unwrap_or(0) + 1;
            SectionProgress {
                index,
                total: ids.len(),
                title: current.title.clone(),
                caption: current.caption.clone(),
            }
        });

        Progress {
            step,
            total,
            section,
        }
    }

    /// Advance one question, stopping at `question_count`.
    ///
    /// A `required` question that is unanswered blocks the move.
    pub fn go_next(&self) -> Result<Self> {
        if let Some(question) = self.current_question() {
            self.check_answered(question)?;
        }
        let mut next = self.clone();
        next.current_index = (self.current_index + 1).min(self.questions.len());
        Ok(next)
    }

    /// Step back one question, stopping at 0. Leaving the result screen
    /// discards the result.
    pub fn go_back(&self) -> Self {
        let mut next = self.clone();
        next.current_index = self.current_index.saturating_sub(1);
        if next.current_index < self.questions.len() {
            next.result = None;
        }
        next
    }

    /// Record an answer.
    ///
    /// Single-choice, text and numeric answers are replaced; chips and
    /// multi-choice answers toggle membership of `value`. Values are not
    /// checked against `options`.
    pub fn set_answer(&self, question_id: &str, value: &str) -> Result<Self> {
        let question = self.question(question_id)?;
        let mut next = self.clone();
        if question.kind.is_multi_valued() {
            next.answers.update_set(question_id, |set| set.toggle(value));
        } else {
            next.answers.replace(question_id, value);
        }
        Ok(next)
    }

    /// Add a chip typed by the user. Blank input and duplicates are no-ops.
    pub fn add_chip(&self, question_id: &str, raw: &str) -> Result<Self> {
        self.multi_valued(question_id)?;
        let value = raw.trim();
        let mut next = self.clone();
        if !value.is_empty() {
            next.answers.update_set(question_id, |set| {
                set.insert(value);
            });
        }
        Ok(next)
    }

    /// Remove a chip. Removing a value that is not present is a no-op.
    pub fn remove_chip(&self, question_id: &str, value: &str) -> Result<Self> {
        self.multi_valued(question_id)?;
        let mut next = self.clone();
        next.answers.update_set(question_id, |set| {
            set.remove(value);
        });
        Ok(next)
    }

    /// Validate the form and produce the submitting state plus the payload
    /// to hand to the evaluator.
    pub fn begin_submit(&self) -> Result<(Self, Submission)> {
        if !self.is_last_question() {
            return Err(ValidationError::NotOnLastQuestion {
                current: self.current_index + 1,
                count: self.questions.len(),
            }
            .into());
        }
        for question in self.questions.iter() {
            self.check_answered(question)?;
        }

        let submission = self.answers.to_submission(&self.questions)?;
        let mut next = self.clone();
        next.is_submitting = true;
        Ok((next, submission))
    }

    /// Apply a successful evaluation: store the result and enter the
    /// terminal state. A previous result is replaced wholesale.
    pub fn complete_submit(&self, payload: R) -> Self {
        let mut next = self.clone();
        next.result = Some(payload);
        next.current_index = self.questions.len();
        next.is_submitting = false;
        next
    }

    /// Roll back after a failed or cancelled evaluation
    pub fn abandon_submit(&self) -> Self {
        let mut next = self.clone();
        next.is_submitting = false;
        next
    }

    /// Run the whole submission against `evaluator`.
    ///
    /// The evaluator is called exactly once. On failure the caller's state is
    /// untouched and the error is returned for reporting; there is no retry.
    pub async fn submit<E>(&self, evaluator: &E) -> Result<Self>
    where
        E: Evaluator<Output = R> + ?Sized,
    {
        let (submitting, submission) = self.begin_submit()?;
        debug!(fields = submission.fields().len(), "submitting answers");

        match evaluator.evaluate(&submission).await {
            Ok(payload) => Ok(submitting.complete_submit(payload)),
            Err(err) => {
                warn!(error = %err, "evaluation failed");
                Err(err.into())
            }
        }
    }

    /// Back to the first question with no answers and no result
    pub fn reset(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            current_index: 0,
            answers: AnswerSet::new(),
            result: None,
            is_submitting: false,
        }
    }

    fn question(&self, id: &str) -> Result<&Question> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| ValidationError::UnknownQuestion(id.to_string()).into())
    }

    fn multi_valued(&self, id: &str) -> Result<&Question> {
        let question = self.question(id)?;
        if !question.kind.is_multi_valued() {
            return Err(ValidationError::NotMultiValued(id.to_string()).into());
        }
        Ok(question)
    }

    fn check_answered(&self, question: &Question) -> Result<()> {
        if question.required && !self.answers.is_answered(question) {
            return Err(WizardError::Validation(ValidationError::Required {
                question: question.id.clone(),
                prompt: question.prompt.clone(),
            }));
        }
        Ok(())
    }
}
