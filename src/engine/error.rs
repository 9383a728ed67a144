//! Error types for the questionnaire engine.
//!
//! `WizardError` is what every engine transition returns on failure. Remote
//! failures are wrapped so callers can tell a recoverable backend problem
//! apart from a broken question list or an incomplete form.

use thiserror::Error;

use crate::remote::RemoteError;

/// Errors produced by wizard transitions.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The question list cannot drive a wizard.
    ///
    /// Raised by `WizardState::initialize` for an empty list, duplicate or
    /// blank ids, or a choice question that has no options. Fatal: the wizard
    /// never starts.
    #[error("invalid question list: {0}")]
    Configuration(String),

    /// The evaluator or question source failed.
    ///
    /// Recoverable. The state returned to the caller is the pre-submission
    /// state, so the user can retry.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The evaluation task stopped without delivering a result.
    ///
    /// Recoverable like `Remote`: the state is rolled back to the last
    /// question.
    #[error("the evaluation stopped unexpectedly, please try again")]
    Interrupted,

    /// The answers or the current position do not allow the transition.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Hardened input checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A question marked `required` has no answer.
    #[error("'{prompt}' needs an answer before you can continue")]
    Required {
        /// Id of the unanswered question
        question: String,
        /// Prompt shown to the user
        prompt: String,
    },

    /// A numeric question holds text that does not parse as a number.
    #[error("'{value}' is not a number (question '{question}')")]
    NotANumber { question: String, value: String },

    /// `submit` was called away from the last question.
    #[error("submit is only available on the last question (at {current} of {count})")]
    NotOnLastQuestion { current: usize, count: usize },

    /// A chip intent was sent to a question that holds a single value.
    #[error("question '{0}' does not take multiple values")]
    NotMultiValued(String),

    /// An answer was addressed to an id that is not in the question list.
    #[error("no question with id '{0}'")]
    UnknownQuestion(String),
}

pub type Result<T> = std::result::Result<T, WizardError>;
