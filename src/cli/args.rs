//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::flows::Flow;
use crate::remote::{
    BackendConfig, DEFAULT_BACKEND_URL, DEFAULT_EVALUATE_PATH, DEFAULT_ROADMAP_PATH,
    DEFAULT_TESTS_PATH,
};

/// Pathwise - figure out a career, or the road to the one you want
#[derive(Parser, Debug)]
#[command(name = "pathwise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the career backend
    #[arg(long, global = true, env = "PATHWISE_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Endpoint that turns know-flow answers into a roadmap
    #[arg(long, global = true, default_value = DEFAULT_ROADMAP_PATH)]
    pub roadmap_path: String,

    /// Endpoint that lists the discover-flow tests
    #[arg(long, global = true, default_value = DEFAULT_TESTS_PATH)]
    pub tests_path: String,

    /// Endpoint that evaluates discover-flow answers
    #[arg(long, global = true, default_value = DEFAULT_EVALUATE_PATH)]
    pub evaluate_path: String,

    /// Request timeout in seconds for every backend call (1-600)
    #[arg(long, global = true, default_value = "60", value_parser = validate_timeout)]
    pub timeout_secs: u64,

    /// Require an answer to every question before moving on
    #[arg(long, global = true, default_value = "false")]
    pub strict: bool,

    /// Answer file (JSON object of question id to text or list of values).
    /// Skips the interactive wizard and submits the answers directly.
    #[arg(short, long, global = true)]
    pub answers: Option<PathBuf>,

    /// Write answers and result to this JSON file
    #[arg(short, long, global = true)]
    pub export: Option<PathBuf>,

    /// Print the raw result as JSON instead of the styled report
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log filter (e.g. "warn", "pathwise=debug"); PATHWISE_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// I know what I want: generate a roadmap for a career
    Know,
    /// I don't know what I want: take short tests and get matched
    Discover,
}

impl Cli {
    /// Flow picked on the command line, if any
    pub fn flow(&self) -> Option<Flow> {
        self.command.map(|command| match command {
            Commands::Know => Flow::Know,
            Commands::Discover => Flow::Discover,
        })
    }

    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.backend_url.clone(),
            roadmap_path: self.roadmap_path.clone(),
            tests_path: self.tests_path.clone(),
            evaluate_path: self.evaluate_path.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Batch mode runs without any terminal UI
    pub fn is_batch(&self) -> bool {
        self.answers.is_some()
    }
}

/// Validator for timeout_secs parameter
fn validate_timeout(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of seconds", s))?;

    if !(1..=600).contains(&value) {
        Err(format!(
            "timeout_secs must be between 1 and 600, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
