//! JSON export of a finished wizard run

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::engine::AnswerSet;
use crate::flows::{Flow, ResultPayload};

/// Metadata about the run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    /// Pathwise version
    pub pathwise_version: String,
    pub flow: Flow,
    /// Backend that produced the result
    pub backend_url: String,
}

/// Complete run export
#[derive(Serialize)]
pub struct RunExport<'a> {
    pub metadata: ExportMetadata,
    pub answers: &'a AnswerSet,
    /// The result payload, untagged
    pub result: &'a serde_json::Value,
}

/// Write answers and result to a pretty-printed JSON file
pub fn export_run(
    answers: &AnswerSet,
    result: &ResultPayload,
    backend_url: &str,
    output_path: &Path,
) -> Result<()> {
    let result_value = result.to_value().context("Failed to serialize result")?;

    let export = RunExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            pathwise_version: env!("CARGO_PKG_VERSION").to_string(),
            flow: result.flow(),
            backend_url: backend_url.to_string(),
        },
        answers,
        result: &result_value,
    };

    let json = serde_json::to_string_pretty(&export).context("Failed to serialize export")?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write export file: {}", output_path.display()))?;

    Ok(())
}
