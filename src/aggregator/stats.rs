//! Summary statistics for a student's profile page.
//!
//! Everything here is a pure function of a [`ProfileBundle`]: no I/O,
//! no hidden state, and no failure path. Missing data simply yields zeros.

use crate::parser::schema::{Contest, ProblemBucket, ProfileBundle, RatingPoint};
use log::debug;
use serde::{Deserialize, Serialize};

/// Derived statistics shown in the profile summary cards
///
/// **Public** - returned from compute_stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    /// Sum of all bucket counts
    pub total_solved: u64,

    /// Hardest tier with at least one solve (0 if none)
    pub max_solved_rating: i64,

    /// Count-weighted mean tier, rounded (0 if nothing solved)
    pub avg_rating: i64,

    /// Problems per active day, one decimal place
    pub avg_per_day: f64,

    /// Days with at least one solve
    pub active_days: u64,

    /// Longest run of consecutive active days
    pub max_streak: u64,

    /// Run of active days ending at the most recent day
    pub current_streak: u64,

    /// Latest rating minus earliest rating
    pub rating_progress: i64,

    pub contest_count: u64,

    /// Lowest valid rank; `None` when no contest has one. Written as 0 in JSON.
    #[serde(with = "rank_or_zero")]
    pub best_rank: Option<u64>,

    /// Name of the first contest achieving `best_rank`
    pub best_rank_contest: String,
}

impl StudentStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Solved: {} | Max tier: {} | Avg tier: {} | Active days: {} | Streak: {} (max {}) | Contests: {}",
            self.total_solved,
            self.max_solved_rating,
            self.avg_rating,
            self.active_days,
            self.current_streak,
            self.max_streak,
            self.contest_count
        )
    }
}

/// Compute summary statistics for a profile bundle
///
/// **Public** - main entry point for stats calculation
///
/// # Arguments
/// * `bundle` - Parsed profile bundle (absent collections are already empty)
///
/// # Returns
/// A fresh `StudentStats`; identical input always yields identical output
pub fn compute_stats(bundle: &ProfileBundle) -> StudentStats {
    let buckets = &bundle.problem_buckets;
    let heatmap = &bundle.heatmap;

    let total_solved = total_solved(buckets);
    let active_days = heatmap.iter().filter(|&&day| day > 0).count() as u64;
    let (best_rank, best_rank_contest) = best_rank(&bundle.contests);

    let stats = StudentStats {
        total_solved,
        max_solved_rating: max_solved_rating(buckets),
        avg_rating: weighted_avg_rating(buckets),
        avg_per_day: avg_per_day(total_solved, active_days),
        active_days,
        max_streak: max_streak(heatmap),
        current_streak: current_streak(heatmap),
        rating_progress: rating_progress(&bundle.rating_history),
        contest_count: bundle.contests.len() as u64,
        best_rank,
        best_rank_contest,
    };

    debug!("Computed stats: {}", stats.summary());

    stats
}

/// Sum of bucket counts, saturating at `u64::MAX`
pub fn total_solved(buckets: &[ProblemBucket]) -> u64 {
    buckets.iter().fold(0u64, |total, b| total.saturating_add(b.count))
}

/// Highest bucket rating with a non-zero count, 0 if none
pub fn max_solved_rating(buckets: &[ProblemBucket]) -> i64 {
    buckets
        .iter()
        .filter(|b| b.count > 0)
        .map(|b| b.rating)
        .fold(0, i64::max)
}

/// Count-weighted mean of bucket ratings, rounded to the nearest integer
///
/// Buckets with a zero count carry zero weight.
pub fn weighted_avg_rating(buckets: &[ProblemBucket]) -> i64 {
    let (points, problems) = buckets.iter().fold((0i128, 0u128), |(points, problems), b| {
        (
            points.saturating_add(b.rating as i128 * b.count as i128),
            problems.saturating_add(b.count as u128),
        )
    });

    if problems == 0 {
        return 0;
    }

    (points as f64 / problems as f64).round() as i64
}

/// Longest run of consecutive positive days
///
/// Single forward scan: the run grows on a positive day and resets on a zero.
pub fn max_streak(heatmap: &[u64]) -> u64 {
    let mut best = 0;
    let mut run = 0;

    for &day in heatmap {
        if day > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }

    best
}

/// Run of positive days ending at the most recent day
///
/// Scans backward from the last entry. A zero on the last day means the
/// streak is broken, so trailing zeros are never skipped.
pub fn current_streak(heatmap: &[u64]) -> u64 {
    heatmap.iter().rev().take_while(|&&day| day > 0).count() as u64
}

/// Last rating minus first rating; 0 with fewer than two points
///
/// Saturates at the `i64` bounds.
pub fn rating_progress(history: &[RatingPoint]) -> i64 {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) if history.len() >= 2 => {
            last.rating.saturating_sub(first.rating)
        }
        _ => 0,
    }
}

fn avg_per_day(total_solved: u64, active_days: u64) -> f64 {
    if active_days == 0 {
        return 0.0;
    }
    let avg = total_solved as f64 / active_days as f64;
    (avg * 10.0).round() / 10.0
}

/// Lowest valid rank and the first contest that achieved it
///
/// Contests without a valid rank are ignored here but still counted
/// in `contest_count`.
pub fn best_rank(contests: &[Contest]) -> (Option<u64>, String) {
    let mut best: Option<(u64, &Contest)> = None;

    for contest in contests {
        let Some(rank) = contest.valid_rank() else {
            continue;
        };
        // Strict comparison keeps the first contest on ties
        if best.map_or(true, |(current, _)| rank < current) {
            best = Some((rank, contest));
        }
    }

    match best {
        Some((rank, contest)) => (Some(rank), contest.name.clone()),
        None => (None, String::new()),
    }
}

/// JSON representation of an optional rank: absent is written as 0
mod rank_or_zero {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(rank: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(rank.unwrap_or(0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        let rank = Option::<u64>::deserialize(deserializer)?;
        Ok(rank.filter(|r| *r > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(name: &str, rank: Option<u64>) -> Contest {
        Contest {
            name: name.to_string(),
            rank,
            ..Default::default()
        }
    }

    #[test]
    fn test_streaks_mixed() {
        let heatmap = [1, 0, 1, 1, 1, 0, 1];
        assert_eq!(max_streak(&heatmap), 3);
        assert_eq!(current_streak(&heatmap), 1);
    }

    #[test]
    fn test_streaks_all_zero() {
        assert_eq!(max_streak(&[0, 0, 0]), 0);
        assert_eq!(current_streak(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_current_streak_trailing_zero() {
        assert_eq!(current_streak(&[2, 3, 0]), 0);
        assert_eq!(max_streak(&[2, 3, 0]), 2);
    }

    #[test]
    fn test_streaks_empty() {
        assert_eq!(max_streak(&[]), 0);
        assert_eq!(current_streak(&[]), 0);
    }

    #[test]
    fn test_weighted_avg_ignores_zero_count() {
        let buckets = [
            ProblemBucket::new(1200, 2),
            ProblemBucket::new(1600, 0),
            ProblemBucket::new(1900, 3),
        ];
        assert_eq!(weighted_avg_rating(&buckets), 1620);
        assert_eq!(max_solved_rating(&buckets), 1900);
        assert_eq!(total_solved(&buckets), 5);
    }

    #[test]
    fn test_max_solved_rating_skips_empty_tiers() {
        let buckets = [ProblemBucket::new(800, 4), ProblemBucket::new(2400, 0)];
        assert_eq!(max_solved_rating(&buckets), 800);
    }

    #[test]
    fn test_avg_per_day_rounding() {
        assert_eq!(avg_per_day(10, 3), 3.3);
        assert_eq!(avg_per_day(5, 0), 0.0);
        assert_eq!(avg_per_day(7, 2), 3.5);
    }

    #[test]
    fn test_rating_progress_uses_endpoints() {
        let history: Vec<RatingPoint> = [1000, 1200, 1100]
            .into_iter()
            .map(RatingPoint::with_rating)
            .collect();
        assert_eq!(rating_progress(&history), 100);
        assert_eq!(rating_progress(&history[..1]), 0);
    }

    #[test]
    fn test_rating_progress_saturates() {
        let history = [RatingPoint::with_rating(i64::MIN), RatingPoint::with_rating(i64::MAX)];
        assert_eq!(rating_progress(&history), i64::MAX);
        let history = [RatingPoint::with_rating(i64::MAX), RatingPoint::with_rating(-1)];
        assert_eq!(rating_progress(&history), i64::MIN);
    }

    #[test]
    fn test_total_solved_saturates() {
        let big = i64::MAX as u64;
        let buckets = [
            ProblemBucket::new(800, big),
            ProblemBucket::new(900, big),
            ProblemBucket::new(1000, big),
        ];
        assert_eq!(total_solved(&buckets), u64::MAX);
    }

    #[test]
    fn test_best_rank_first_on_tie() {
        let contests = [
            contest("A", Some(7)),
            contest("B", None),
            contest("C", Some(3)),
            contest("D", Some(3)),
        ];
        assert_eq!(best_rank(&contests), (Some(3), "C".to_string()));
    }

    #[test]
    fn test_best_rank_none_without_valid_ranks() {
        let contests = [contest("A", None), contest("B", Some(0))];
        assert_eq!(best_rank(&contests), (None, String::new()));
    }

    #[test]
    fn test_best_rank_serializes_as_zero() {
        let stats = StudentStats::default();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["bestRank"], 0);
        assert_eq!(json["bestRankContest"], "");

        let back: StudentStats = serde_json::from_value(json).unwrap();
        assert_eq!(back.best_rank, None);
    }
}
