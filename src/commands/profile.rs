//! Profile commands: `show` (live from the API) and `stats` (offline file).
//!
//! Both follow the same pipeline:
//! 1. Obtain the raw profile bundle
//! 2. Parse it leniently
//! 3. Compute stats and chart summaries
//! 4. Print the summary and optionally write the JSON report

use super::models::{ShowArgs, StatsArgs};
use super::utils::validate_api_url;
use crate::output::{
    build_report, render_contest_table, render_heatmap, render_profile_summary, write_report,
    StatsReport,
};
use crate::aggregator::ContestSortField;
use crate::parser::{parse_bundle, parse_bundle_str, ProfileBundle};
use crate::roster::SortState;
use crate::rpc::ApiClient;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the show command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * API connection failures, unknown student, server errors
/// * Bundle is not a JSON object
/// * Report write errors
pub fn execute_show(args: ShowArgs) -> Result<StatsReport> {
    let start_time = Instant::now();

    validate_show_args(&args)?;

    info!("Step 1/3: Fetching profile bundle for {}...", args.student_id);
    let client = ApiClient::new(&args.api_url).context("Failed to create API client")?;
    let raw = client
        .get_profile_bundle(&args.student_id)
        .with_context(|| format!("Failed to load profile of student {}", args.student_id))?;

    info!("Step 2/3: Parsing profile bundle...");
    let bundle = parse_bundle(&raw).context("Failed to parse profile bundle")?;

    info!("Step 3/3: Computing statistics...");
    let report = present(
        &bundle,
        args.output_json.as_deref(),
        args.show_heatmap,
        args.show_contests,
        args.contest_sort,
    )?;

    info!("Profile loaded in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(report)
}

/// Execute the stats command on a saved bundle file
///
/// **Public** - works without a running API
pub fn execute_stats(args: StatsArgs) -> Result<StatsReport> {
    info!("Reading profile bundle: {}", args.input.display());

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let bundle = parse_bundle_str(&raw).context("Failed to parse profile bundle")?;

    present(
        &bundle,
        args.output_json.as_deref(),
        args.show_heatmap,
        args.show_contests,
        args.contest_sort,
    )
}

/// Compute, print and optionally persist the report
///
/// **Private** - shared tail of both commands
fn present(
    bundle: &ProfileBundle,
    output_json: Option<&Path>,
    show_heatmap: bool,
    show_contests: bool,
    contest_sort: Option<SortState<ContestSortField>>,
) -> Result<StatsReport> {
    let report = build_report(bundle);
    debug!("Stats: {}", report.stats.summary());

    println!("{}", render_profile_summary(bundle, &report.stats));

    if show_heatmap {
        let today = chrono::Local::now().date_naive();
        println!("{}", render_heatmap(&bundle.heatmap, today));
    }

    if show_contests {
        println!("{}", render_contest_table(&bundle.contests, contest_sort));
    }

    if let Some(path) = output_json {
        write_report(&report, path).context("Failed to write stats report")?;
        info!("✓ Report written to: {}", path.display());
    }

    Ok(report)
}

/// Validate show arguments
///
/// **Public** - can be called before execute_show for early validation
pub fn validate_show_args(args: &ShowArgs) -> Result<()> {
    validate_api_url(&args.api_url)?;

    if args.student_id.trim().is_empty() {
        anyhow::bail!("Student id cannot be empty");
    }

    if let Some(path) = &args.output_json {
        crate::output::validate_output_path(path)?;
    }

    Ok(())
}

/// Default report file name for a student
pub fn default_report_path(student_id: &str) -> PathBuf {
    PathBuf::from(format!("stats-{}.json", student_id.trim()))
}
