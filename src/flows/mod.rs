//! Flows module - the two questionnaires and their result schemas

pub mod discover;
pub mod know;

use serde::{Deserialize, Serialize};

pub use discover::{DiscoveryEvaluator, DiscoveryMatch, TestCatalog};
pub use know::{Roadmap, RoadmapEvaluator};

/// Which questionnaire is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// "I know what I want" - build a roadmap for a chosen career
    Know,
    /// "I don't know what I want" - match careers from short tests
    Discover,
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flow::Know => write!(f, "know"),
            Flow::Discover => write!(f, "discover"),
        }
    }
}

impl Flow {
    pub fn title(self) -> &'static str {
        match self {
            Flow::Know => "Reverse-Engineer Your Role",
            Flow::Discover => "Let's figure it out together",
        }
    }

    /// Label of the action on the last question
    pub fn submit_label(self) -> &'static str {
        match self {
            Flow::Know => "Generate Roadmap",
            Flow::Discover => "See my fit",
        }
    }

    /// Shown while the evaluator is working
    pub fn busy_label(self) -> &'static str {
        match self {
            Flow::Know => "Cooking your roadmap…",
            Flow::Discover => "Matching your vibe…",
        }
    }
}

/// Result returned by the backend, keyed by flow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "flow", content = "result", rename_all = "lowercase")]
pub enum ResultPayload {
    Roadmap(Roadmap),
    Discovery(DiscoveryMatch),
}

impl ResultPayload {
    pub fn flow(&self) -> Flow {
        match self {
            ResultPayload::Roadmap(_) => Flow::Know,
            ResultPayload::Discovery(_) => Flow::Discover,
        }
    }

    pub fn as_roadmap(&self) -> Option<&Roadmap> {
        match self {
            ResultPayload::Roadmap(r) => Some(r),
            ResultPayload::Discovery(_) => None,
        }
    }

    pub fn as_discovery(&self) -> Option<&DiscoveryMatch> {
        match self {
            ResultPayload::Roadmap(_) => None,
            ResultPayload::Discovery(d) => Some(d),
        }
    }

    /// The bare result object, without the flow tag
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ResultPayload::Roadmap(r) => serde_json::to_value(r),
            ResultPayload::Discovery(d) => serde_json::to_value(d),
        }
    }
}

/// A course link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}
