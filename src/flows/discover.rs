//! "I don't know what I want": questions come from the backend's test catalog
//! and all answers are evaluated in one call.
//!
//! The catalog is an array of tests, each with a title, a one-line vibe and
//! a handful of single/multi choice questions. Tests are flattened into one
//! question list; every question keeps its test as a `Section` so the UI can
//! still show "Test k / M".

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Course, ResultPayload};
use crate::engine::question::string_or_number;
use crate::engine::{Question, Section, Submission};
use crate::remote::{Backend, Evaluator, QuestionSource, RemoteError};

/// One test from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscoverTest {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub vibe: Option<String>,
    pub questions: Vec<Question>,
}

/// A catalog element: a whole test, or a bare question
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    Test(DiscoverTest),
    Question(Question),
}

/// Flatten catalog entries into one ordered question list
pub fn flatten_catalog(entries: Vec<CatalogEntry>) -> Vec<Question> {
    let mut questions = Vec::new();
    for entry in entries {
        match entry {
            CatalogEntry::Test(test) => {
                let section = Section {
                    id: test.id,
                    title: test.title,
                    caption: test.vibe,
                };
                questions.extend(
                    test.questions
                        .into_iter()
                        .map(|q| q.in_section(section.clone())),
                );
            }
            CatalogEntry::Question(q) => questions.push(q),
        }
    }
    questions
}

/// Fetches the test catalog with a single GET
#[derive(Debug, Clone)]
pub struct TestCatalog {
    backend: Backend,
    path: String,
}

impl TestCatalog {
    pub fn new(backend: Backend, path: impl Into<String>) -> Self {
        Self {
            backend,
            path: path.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for TestCatalog {
    async fn questions(&self) -> Result<Vec<Question>, RemoteError> {
        let entries: Vec<CatalogEntry> = self.backend.get_json(&self.path).await?;
        let tests = entries.len();
        let questions = flatten_catalog(entries);
        info!(tests, questions = questions.len(), "test catalog loaded");
        Ok(questions)
    }
}

/// Career match for the discover flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryMatch {
    pub best_fit_careers: Vec<String>,
    pub careers_to_avoid: Vec<String>,
    pub ask_salary_prompt: String,
    pub ask_full_roadmap_prompt: String,
    pub ask_counselor_prompt: String,
    /// Role name to starter courses
    pub courses_to_start_now: BTreeMap<String, Vec<Course>>,
}

#[derive(Serialize)]
struct EvaluateRequest<'a> {
    answers: &'a Submission,
}

/// Posts `{"answers": {...}}` to the evaluate endpoint
#[derive(Debug, Clone)]
pub struct DiscoveryEvaluator {
    backend: Backend,
    path: String,
}

impl DiscoveryEvaluator {
    pub fn new(backend: Backend, path: impl Into<String>) -> Self {
        Self {
            backend,
            path: path.into(),
        }
    }
}

#[async_trait]
impl Evaluator for DiscoveryEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, submission: &Submission) -> Result<ResultPayload, RemoteError> {
        let request = EvaluateRequest {
            answers: submission,
        };
        let matched: DiscoveryMatch = self.backend.post_json(&self.path, &request).await?;
        info!(best_fit = matched.best_fit_careers.len(), "discovery match received");
        Ok(ResultPayload::Discovery(matched))
    }
}
