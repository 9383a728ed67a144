//! Shared test utilities: question fixtures and stub evaluators

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use pathwise::engine::{Question, QuestionKind, Section, Submission};
use pathwise::flows::{DiscoveryMatch, ResultPayload, Roadmap};
use pathwise::remote::{Evaluator, RemoteError};

/// One question of every kind, none required
///
/// Order: `name` (text), `age` (number), `skills` (chips),
/// `weekend` (single), `joy` (multi)
pub fn mixed_questions() -> Vec<Question> {
    vec![
        Question::new("name", "What should we call you?", QuestionKind::Text),
        Question::new("age", "How old are you?", QuestionKind::Number),
        Question::new("skills", "What are you good at?", QuestionKind::Chips),
        Question::new("weekend", "Weekend plan?", QuestionKind::Single)
            .with_options(["Party", "Books", "Hike"]),
        Question::new("joy", "Pick what sparks joy", QuestionKind::Multi)
            .with_options(["Code", "Draw", "Talk"]),
    ]
}

/// Two sectioned tests, three questions
pub fn sectioned_questions() -> Vec<Question> {
    let energy = Section {
        id: "t1".to_string(),
        title: "Energy check".to_string(),
        caption: Some("How do you recharge?".to_string()),
    };
    let style = Section {
        id: "t2".to_string(),
        title: "Work style".to_string(),
        caption: None,
    };
    vec![
        Question::new("q1", "Weekend plan?", QuestionKind::Single)
            .with_options(["Party", "Books"])
            .in_section(energy.clone()),
        Question::new("q2", "Pick what sparks joy", QuestionKind::Multi)
            .with_options(["Code", "Draw"])
            .in_section(energy),
        Question::new("q3", "Team or solo?", QuestionKind::Single)
            .with_options(["Team", "Solo"])
            .in_section(style),
    ]
}

pub fn roadmap(career: &str) -> ResultPayload {
    ResultPayload::Roadmap(Roadmap {
        career: career.to_string(),
        ..Default::default()
    })
}

pub fn discovery(best_fit: &[&str]) -> ResultPayload {
    ResultPayload::Discovery(DiscoveryMatch {
        best_fit_careers: best_fit.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    })
}

/// Returns a fixed payload and records every submission it sees
pub struct StubEvaluator {
    payload: ResultPayload,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<Submission>>,
}

impl StubEvaluator {
    pub fn new(payload: ResultPayload) -> Self {
        Self {
            payload,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_submission(&self) -> Option<Submission> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl Evaluator for StubEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, submission: &Submission) -> Result<ResultPayload, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(submission.clone());
        Ok(self.payload.clone())
    }
}

/// Fails every call with an HTTP 500
pub struct FailingEvaluator {
    pub calls: AtomicUsize,
}

impl FailingEvaluator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Evaluator for FailingEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, _submission: &Submission) -> Result<ResultPayload, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RemoteError::Status {
            url: "http://backend.test/api/roadmap".to_string(),
            status: 500,
            body: "boom".to_string(),
        })
    }
}

/// Fails the first call, succeeds afterwards
pub struct FlakyEvaluator {
    pub calls: AtomicUsize,
    payload: ResultPayload,
}

impl FlakyEvaluator {
    pub fn new(payload: ResultPayload) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            payload,
        }
    }
}

#[async_trait]
impl Evaluator for FlakyEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, _submission: &Submission) -> Result<ResultPayload, RemoteError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(RemoteError::Status {
                url: "http://backend.test/api/roadmap".to_string(),
                status: 503,
                body: "warming up".to_string(),
            });
        }
        Ok(self.payload.clone())
    }
}

/// Answers call `n` after `delays[n]` with a roadmap for `careers[n]`
pub struct ScriptedEvaluator {
    calls: AtomicUsize,
    script: Vec<(Duration, &'static str)>,
}

impl ScriptedEvaluator {
    pub fn new(script: Vec<(Duration, &'static str)>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            script,
        }
    }
}

#[async_trait]
impl Evaluator for ScriptedEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, _submission: &Submission) -> Result<ResultPayload, RemoteError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, career) = self.script[call.min(self.script.len() - 1)];
        tokio::time::sleep(delay).await;
        Ok(roadmap(career))
    }
}

/// Sleeps, then raises `finished`; shows whether the task ran to completion
pub struct SlowEvaluator {
    delay: Duration,
    pub finished: Arc<AtomicBool>,
}

impl SlowEvaluator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl Evaluator for SlowEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, _submission: &Submission) -> Result<ResultPayload, RemoteError> {
        tokio::time::sleep(self.delay).await;
        self.finished.store(true, Ordering::SeqCst);
        Ok(roadmap("slow"))
    }
}

/// Panics inside the evaluation task
pub struct PanickingEvaluator;

#[async_trait]
impl Evaluator for PanickingEvaluator {
    type Output = ResultPayload;

    async fn evaluate(&self, _submission: &Submission) -> Result<ResultPayload, RemoteError> {
        panic!("evaluator blew up");
    }
}
