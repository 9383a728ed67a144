//! Remote module - the collaborators the wizard talks to
//!
//! `Evaluator` turns a completed answer set into a result; `QuestionSource`
//! supplies the question list before the wizard starts.

mod error;
mod http;

pub use error::RemoteError;
pub use http::*;

use async_trait::async_trait;

use crate::engine::{Question, Submission};

/// Converts a completed submission into a result payload
#[async_trait]
pub trait Evaluator: Send + Sync {
    type Output: Send;

    async fn evaluate(&self, submission: &Submission) -> Result<Self::Output, RemoteError>;
}

/// Supplies the ordered question list
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn questions(&self) -> Result<Vec<Question>, RemoteError>;
}

/// Compiled-in question list
#[derive(Debug, Clone)]
pub struct StaticQuestions(pub Vec<Question>);

#[async_trait]
impl QuestionSource for StaticQuestions {
    async fn questions(&self) -> Result<Vec<Question>, RemoteError> {
        Ok(self.0.clone())
    }
}
