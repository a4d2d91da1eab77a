//! Per-chart summaries for the profile view.
//!
//! Each chart on the profile page carries a few headline numbers next to it:
//! rating range for the rating chart, the most-solved tier for the
//! difficulty histogram, rank spread for the contest table, and an intensity
//! level per heatmap cell.

use crate::parser::schema::{Contest, ProblemBucket, RatingPoint};
use crate::utils::config::CONTEST_LABEL_MAX_CHARS;
use serde::{Deserialize, Serialize};

/// Headline numbers for the rating history chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub max: i64,
    pub min: i64,
    pub avg: i64,
    /// Last rating minus first rating
    pub change: i64,
    pub points: usize,
}

/// Summarize a rating history
///
/// **Public** - all fields are 0 for an empty history
pub fn summarize_rating_history(history: &[RatingPoint]) -> RatingSummary {
    if history.is_empty() {
        return RatingSummary::default();
    }

    let ratings = history.iter().map(|p| p.rating);
    let max = ratings.clone().max().unwrap_or(0);
    let min = ratings.clone().min().unwrap_or(0);
    let sum: i128 = ratings.map(i128::from).sum();
    let avg = (sum as f64 / history.len() as f64).round() as i64;

    RatingSummary {
        max,
        min,
        avg,
        change: super::stats::rating_progress(history),
        points: history.len(),
    }
}

/// Headline numbers for the difficulty histogram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    pub total: u64,

    /// Tier with the most solves; ties go to the first bucket
    pub most_solved: Option<ProblemBucket>,

    pub max_solved_rating: i64,
}

/// Summarize problem buckets
///
/// **Public** - `most_solved` is `None` when nothing was solved
pub fn summarize_buckets(buckets: &[ProblemBucket]) -> BucketSummary {
    let mut most_solved: Option<ProblemBucket> = None;
    for bucket in buckets.iter().filter(|b| b.count > 0) {
        if most_solved.map_or(true, |best| bucket.count > best.count) {
            most_solved = Some(*bucket);
        }
    }

    BucketSummary {
        total: super::stats::total_solved(buckets),
        most_solved,
        max_solved_rating: super::stats::max_solved_rating(buckets),
    }
}

/// Headline numbers for the contest table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestSummary {
    pub total_contests: usize,

    /// Contests that raised the rating
    pub positive_changes: usize,

    /// Share of contests that raised the rating, as a rounded percent
    pub success_rate: u64,

    /// Sum of all rating changes, saturating at the `i64` bounds
    pub net_change: i64,

    pub best_rank: Option<u64>,
    pub worst_rank: Option<u64>,

    /// Rounded mean of valid ranks, 0 if none
    pub avg_rank: u64,
}

/// Summarize the contest table
///
/// **Public** - ranks that are absent or non-positive are ignored
pub fn summarize_contests(contests: &[Contest]) -> ContestSummary {
    let ranks: Vec<u64> = contests.iter().filter_map(Contest::valid_rank).collect();

    let avg_rank = if ranks.is_empty() {
        0
    } else {
        let sum: u128 = ranks.iter().map(|&r| r as u128).sum();
        (sum as f64 / ranks.len() as f64).round() as u64
    };

    let positive_changes = contests.iter().filter(|c| c.change > 0).count();

    ContestSummary {
        total_contests: contests.len(),
        positive_changes,
        success_rate: success_rate(positive_changes, contests.len()),
        net_change: contests
            .iter()
            .fold(0i64, |net, c| net.saturating_add(c.change)),
        best_rank: ranks.iter().copied().min(),
        worst_rank: ranks.iter().copied().max(),
        avg_rank,
    }
}

fn success_rate(positive: usize, total: usize) -> u64 {
    if total == 0 {
        return 0;
    }
    (positive as f64 / total as f64 * 100.0).round() as u64
}

/// Intensity bucket of one heatmap cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatLevel {
    None,
    Low,
    Light,
    Medium,
    High,
    Max,
}

impl HeatLevel {
    /// Classify a normalized intensity in [0, 1]
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity <= 0.0 {
            HeatLevel::None
        } else if intensity < 0.2 {
            HeatLevel::Low
        } else if intensity < 0.4 {
            HeatLevel::Light
        } else if intensity < 0.6 {
            HeatLevel::Medium
        } else if intensity < 0.8 {
            HeatLevel::High
        } else {
            HeatLevel::Max
        }
    }

    /// Single-character cell for terminal rendering
    pub fn glyph(&self) -> char {
        match self {
            HeatLevel::None => '·',
            HeatLevel::Low => '░',
            HeatLevel::Light => '▒',
            HeatLevel::Medium => '▓',
            HeatLevel::High => '█',
            HeatLevel::Max => '■',
        }
    }
}

/// Intensity level for every day of the activity record
///
/// Values are scaled by the busiest day (at least 1, so an all-zero
/// record never divides by zero).
pub fn heat_levels(heatmap: &[u64]) -> Vec<HeatLevel> {
    let max = heatmap.iter().copied().max().unwrap_or(0).max(1) as f64;
    heatmap
        .iter()
        .map(|&day| HeatLevel::from_intensity((day as f64 / max).min(1.0)))
        .collect()
}

/// Codeforces rank tier for a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatingTier {
    Unrated,
    Newbie,
    Pupil,
    Specialist,
    Expert,
    CandidateMaster,
    Master,
    Grandmaster,
}

impl RatingTier {
    /// Tier for a rating; 0 and below count as unrated
    pub fn from_rating(rating: i64) -> Self {
        match rating {
            i64::MIN..=0 => RatingTier::Unrated,
            1..=1199 => RatingTier::Newbie,
            1200..=1399 => RatingTier::Pupil,
            1400..=1599 => RatingTier::Specialist,
            1600..=1899 => RatingTier::Expert,
            1900..=2099 => RatingTier::CandidateMaster,
            2100..=2399 => RatingTier::Master,
            _ => RatingTier::Grandmaster,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::Unrated => "Unrated",
            RatingTier::Newbie => "Newbie",
            RatingTier::Pupil => "Pupil",
            RatingTier::Specialist => "Specialist",
            RatingTier::Expert => "Expert",
            RatingTier::CandidateMaster => "Candidate Master",
            RatingTier::Master => "Master",
            RatingTier::Grandmaster => "Grandmaster",
        }
    }
}

/// Short label for a contest name
///
/// `"Codeforces Round #789 (Div. 2)"` becomes `"Round 789"`. Other names
/// longer than the label limit are cut and suffixed with `...`.
pub fn contest_short_label(name: &str) -> String {
    if let Some(number) = round_number(name) {
        return format!("Round {}", number);
    }

    if name.chars().count() > CONTEST_LABEL_MAX_CHARS {
        let cut: String = name.chars().take(CONTEST_LABEL_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

/// Digits following a case-insensitive "Round #"
fn round_number(name: &str) -> Option<&str> {
    let lower = name.to_ascii_lowercase();
    let start = lower.find("round #")? + "round #".len();
    let rest = &name[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}
