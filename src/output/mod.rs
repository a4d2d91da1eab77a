//! Output writers for stats reports and terminal views.
//!
//! This module handles:
//! - The versioned JSON stats report (build, write, read)
//! - Text rendering of the roster table, profile summary, heatmap and contests

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_output_path, write_report};
pub use report::{build_report, StatsReport};
pub use text::{render_contest_table, render_heatmap, render_profile_summary, render_roster_table};
