//! Stats report files.
//!
//! Reports are serialized in full before the file is touched, so a
//! serialization failure never leaves a truncated report behind.

use super::report::StatsReport;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info, warn};
use std::path::Path;

/// Write a report to a JSON file, creating parent directories as needed
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path, a directory, or an uncreatable parent
/// * `OutputError::SerializationFailed` - Report could not be encoded
/// * `OutputError::WriteFailed` - I/O error while writing
pub fn write_report(report: &StatsReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    validate_output_path(output_path)?;

    let json = report_to_string(report)?;

    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!("Creating report directory {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create {}: {}", parent.display(), e))
            })?;
        }
        _ => {}
    }

    std::fs::write(output_path, &json)?;
    info!(
        "Stats report for {} saved to {} ({} bytes)",
        report.student_name,
        output_path.display(),
        json.len()
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string(report: &StatsReport) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Reject paths a report can never be written to
///
/// **Public** - exposed for early argument checks
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Load a previously written report
///
/// A report written by another schema version still loads; the mismatch
/// is only logged.
///
/// # Errors
/// * `OutputError::ReadFailed` - File missing or unreadable
/// * `OutputError::SerializationFailed` - Contents are not a stats report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<StatsReport, OutputError> {
    let input_path = input_path.as_ref();

    let text = std::fs::read_to_string(input_path).map_err(|source| OutputError::ReadFailed {
        path: input_path.display().to_string(),
        source,
    })?;
    let report: StatsReport = serde_json::from_str(&text)?;

    if report.version != SCHEMA_VERSION {
        warn!(
            "Report {} has schema version {} (expected {})",
            input_path.display(),
            report.version,
            SCHEMA_VERSION
        );
    }
    debug!("Loaded stats report for {}", report.student_name);

    Ok(report)
}
