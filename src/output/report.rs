//! Stats report schema.
//!
//! This is the structure of the JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{
    compute_stats, summarize_buckets, summarize_contests, summarize_rating_history,
    BucketSummary, ContestSummary, RatingSummary, StudentStats,
};
use crate::parser::schema::ProfileBundle;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub student_id: String,
    pub student_name: String,
    pub cf_handle: String,

    /// Summary card statistics
    pub stats: StudentStats,

    pub rating: RatingSummary,
    pub buckets: BucketSummary,
    pub contests: ContestSummary,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,
}

/// Build a report for a parsed bundle
///
/// **Public** - main entry point for report creation
pub fn build_report(bundle: &ProfileBundle) -> StatsReport {
    StatsReport {
        version: SCHEMA_VERSION.to_string(),
        student_id: bundle.profile.id.clone(),
        student_name: bundle.profile.display_name().to_string(),
        cf_handle: bundle.profile.cf_handle.clone(),
        stats: compute_stats(bundle),
        rating: summarize_rating_history(&bundle.rating_history),
        buckets: summarize_buckets(&bundle.problem_buckets),
        contests: summarize_contests(&bundle.contests),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}
