//! Aggregation of profile bundles into display statistics.
//!
//! This module transforms parsed profile bundles into:
//! - Summary stats (totals, streaks, rating progress, best rank)
//! - Per-chart headline numbers (rating range, most-solved tier, rank spread)
//! - Heatmap intensity levels and rating tiers
//! - Contest table ordering, performance labels and rank highlighting

pub mod contests;
pub mod stats;
pub mod summary;

// Re-export main types and functions
pub use contests::{
    sort_contests, ContestPerformance, ContestSortField, RankHighlight, RankHighlighter,
};
pub use stats::{compute_stats, current_streak, max_streak, StudentStats};
pub use summary::{
    contest_short_label, heat_levels, summarize_buckets, summarize_contests,
    summarize_rating_history, BucketSummary, ContestSummary, HeatLevel, RatingSummary, RatingTier,
};
