//! Pathwise: Career Questionnaire Library
//!
//! A step-by-step questionnaire engine with two flows: "I know what I want"
//! turns a chosen career into a roadmap, and "I don't know what I want"
//! runs short tests and matches careers to the answers.

pub mod cli;
pub mod engine;
pub mod flows;
pub mod remote;
pub mod report;
pub mod utils;
