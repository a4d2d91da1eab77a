use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Check that an API base URL is usable
pub fn validate_api_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        anyhow::bail!("API URL cannot be empty");
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("API URL must start with http:// or https://");
    }

    Ok(())
}

/// Validate a stats report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        println!(
            "! Schema version {} differs from current {}",
            report.version, SCHEMA_VERSION
        );
    }

    println!("✓ Valid stats report");
    println!("  Version: {}", report.version);
    println!("  Student: {} ({})", report.student_name, report.cf_handle);
    println!("  Problems Solved: {}", report.stats.total_solved);
    println!("  Contests: {}", report.stats.contest_count);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("CF Roster v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Codeforces progress tracking for a roster of students.");
}
