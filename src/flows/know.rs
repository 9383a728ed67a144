//! "I know what I want": five fixed questions, one roadmap.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Course, ResultPayload};
use crate::engine::{Question, QuestionKind, Submission};
use crate::remote::{Backend, Evaluator, RemoteError};

pub const CAREER: &str = "career";
pub const AGE: &str = "age";
pub const PASSIONS_OR_SKILLS: &str = "passions_or_skills";
pub const EDUCATION_LEVEL: &str = "education_level";
pub const LIFESTYLE_OR_SALARY: &str = "lifestyle_or_salary";

/// The know flow's questions. Only the career is required.
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(CAREER, "What career do you want to pursue?", QuestionKind::Text)
            .with_placeholder("e.g., Software Developer, Product Designer...")
            .required(),
        Question::new(AGE, "How old are you?", QuestionKind::Number).with_placeholder("18"),
        Question::new(
            PASSIONS_OR_SKILLS,
            "What are your passions or skills?",
            QuestionKind::Chips,
        )
        .with_placeholder("Add a few like coding, design, writing..."),
        Question::new(
            EDUCATION_LEVEL,
            "What’s your current education level?",
            QuestionKind::Text,
        )
        .with_placeholder("12th, B.Tech 2nd year, etc."),
        Question::new(
            LIFESTYLE_OR_SALARY,
            "What kind of lifestyle or salary do you want?",
            QuestionKind::Text,
        )
        .with_placeholder("e.g., ₹15L+ in 3 years, remote flexibility"),
    ]
}

/// One stage of the timeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub focus: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRanges {
    #[serde(default)]
    pub entry: String,
    #[serde(default)]
    pub mid: String,
    #[serde(default)]
    pub senior: String,
    #[serde(default)]
    pub note: String,
}

/// Stage-wise roadmap for one career
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roadmap {
    pub career: String,
    pub skills_to_learn: Vec<String>,
    pub courses: Vec<Course>,
    pub tools_to_master: Vec<String>,
    pub side_projects: Vec<String>,
    pub internships: Vec<String>,
    pub certifications: Vec<String>,
    pub mistakes_to_avoid: Vec<String>,
    pub timeline: Vec<Stage>,
    pub salary_ranges: SalaryRanges,
    pub portfolio_tips: Vec<String>,
    pub first_opportunity: Vec<String>,
}

/// Posts the flat answer object to the roadmap endpoint
#[derive(Debug, Clone)]
pub struct RoadmapEvaluator {
    backend: Backend,
    path: String,
}

impl RoadmapEvaluator {
    pub fn new(backend: Backend, path: impl Into<String>) -> Self {
        Self {
            backend,
            path: path.into(),
        }
    }
}

#[async_trait]
impl Evaluator for RoadmapEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, submission: &Submission) -> Result<ResultPayload, RemoteError> {
        let roadmap: Roadmap = self.backend.post_json(&self.path, submission).await?;
        info!(career = %roadmap.career, stages = roadmap.timeline.len(), "roadmap received");
        Ok(ResultPayload::Roadmap(roadmap))
    }
}
