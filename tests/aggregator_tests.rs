use cf_roster::aggregator::{
    compute_stats, summarize_buckets, summarize_contests, summarize_rating_history, StudentStats,
};
use cf_roster::parser::{parse_bundle_str, Contest, ProblemBucket, ProfileBundle, RatingPoint};
use pretty_assertions::assert_eq;

fn contest(name: &str, rank: Option<u64>, change: i64) -> Contest {
    Contest {
        name: name.to_string(),
        rank,
        change,
        unsolved: 1,
        problems: 6,
    }
}

fn history(ratings: &[i64]) -> Vec<RatingPoint> {
    ratings.iter().copied().map(RatingPoint::with_rating).collect()
}

#[test]
fn test_empty_bundle_is_all_zero() {
    let stats = compute_stats(&ProfileBundle::default());

    assert_eq!(stats, StudentStats::default());
    assert_eq!(stats.best_rank, None);
    assert_eq!(stats.best_rank_contest, "");
    assert_eq!(stats.avg_per_day, 0.0);
}

#[test]
fn test_total_solved_is_order_independent() {
    let buckets = vec![
        ProblemBucket::new(800, 4),
        ProblemBucket::new(1200, 2),
        ProblemBucket::new(1900, 3),
    ];
    let mut reversed = buckets.clone();
    reversed.reverse();
    let rotated = vec![buckets[1], buckets[2], buckets[0]];

    for order in [buckets, reversed, rotated] {
        let bundle = ProfileBundle {
            problem_buckets: order,
            ..Default::default()
        };
        assert_eq!(compute_stats(&bundle).total_solved, 9);
    }
}

#[test]
fn test_streaks_from_activity_record() {
    let cases: [(&[u64], u64, u64); 3] = [
        (&[1, 0, 1, 1, 1, 0, 1], 3, 1),
        (&[0, 0, 0], 0, 0),
        (&[2, 3, 0], 2, 0),
    ];

    for (heatmap, max, current) in cases {
        let bundle = ProfileBundle {
            heatmap: heatmap.to_vec(),
            ..Default::default()
        };
        let stats = compute_stats(&bundle);
        assert_eq!(stats.max_streak, max, "max streak of {:?}", heatmap);
        assert_eq!(stats.current_streak, current, "current streak of {:?}", heatmap);
    }
}

#[test]
fn test_bucket_stats() {
    let bundle = ProfileBundle {
        problem_buckets: vec![
            ProblemBucket::new(1200, 2),
            ProblemBucket::new(1600, 0),
            ProblemBucket::new(1900, 3),
        ],
        ..Default::default()
    };

    let stats = compute_stats(&bundle);

    assert_eq!(stats.total_solved, 5);
    assert_eq!(stats.max_solved_rating, 1900);
    assert_eq!(stats.avg_rating, 1620);
}

#[test]
fn test_rating_progress_uses_first_and_last() {
    let single = ProfileBundle {
        rating_history: history(&[1500]),
        ..Default::default()
    };
    assert_eq!(compute_stats(&single).rating_progress, 0);

    let bundle = ProfileBundle {
        rating_history: history(&[1000, 1200, 1100]),
        ..Default::default()
    };
    assert_eq!(compute_stats(&bundle).rating_progress, 100);
}

#[test]
fn test_best_rank_skips_missing_ranks() {
    let bundle = ProfileBundle {
        contests: vec![
            contest("Round #800", Some(50), 12),
            contest("Round #801", Some(5), 40),
            contest("Round #802", None, -8),
        ],
        ..Default::default()
    };

    let stats = compute_stats(&bundle);

    assert_eq!(stats.best_rank, Some(5));
    assert_eq!(stats.contest_count, 3);
    assert_eq!(stats.best_rank_contest, "Round #801");
}

#[test]
fn test_avg_per_day_and_active_days() {
    let bundle = ProfileBundle {
        problem_buckets: vec![ProblemBucket::new(1000, 10)],
        heatmap: vec![3, 0, 4, 3, 0],
        ..Default::default()
    };

    let stats = compute_stats(&bundle);

    assert_eq!(stats.active_days, 3);
    assert_eq!(stats.avg_per_day, 3.3);
}

#[test]
fn test_compute_stats_is_idempotent() {
    let bundle = ProfileBundle {
        rating_history: history(&[1100, 1250, 1190]),
        problem_buckets: vec![ProblemBucket::new(1300, 7), ProblemBucket::new(1500, 2)],
        heatmap: vec![0, 1, 2, 0, 5, 1],
        contests: vec![contest("Good Bye", Some(321), 25)],
        ..Default::default()
    };
    let snapshot = bundle.clone();

    let first = compute_stats(&bundle);
    let second = compute_stats(&bundle);

    assert_eq!(first, second);
    assert_eq!(first.avg_per_day.to_bits(), second.avg_per_day.to_bits());
    assert_eq!(bundle, snapshot);
}

#[test]
fn test_rating_summary() {
    let summary = summarize_rating_history(&history(&[1000, 1400, 1100]));

    assert_eq!(summary.max, 1400);
    assert_eq!(summary.min, 1000);
    assert_eq!(summary.avg, 1167);
    assert_eq!(summary.change, 100);
    assert_eq!(summary.points, 3);

    assert_eq!(summarize_rating_history(&[]).points, 0);
}

#[test]
fn test_bucket_summary_most_solved() {
    let summary = summarize_buckets(&[
        ProblemBucket::new(800, 5),
        ProblemBucket::new(1000, 9),
        ProblemBucket::new(1200, 9),
        ProblemBucket::new(2000, 0),
    ]);

    assert_eq!(summary.total, 23);
    assert_eq!(summary.most_solved, Some(ProblemBucket::new(1000, 9)));
    assert_eq!(summary.max_solved_rating, 1200);

    let empty = summarize_buckets(&[ProblemBucket::new(1500, 0)]);
    assert_eq!(empty.most_solved, None);
}

#[test]
fn test_contest_summary() {
    let summary = summarize_contests(&[
        contest("A", Some(120), 30),
        contest("B", Some(40), -15),
        contest("C", None, 0),
        contest("D", Some(301), 12),
    ]);

    assert_eq!(summary.total_contests, 4);
    assert_eq!(summary.positive_changes, 2);
    assert_eq!(summary.net_change, 27);
    assert_eq!(summary.best_rank, Some(40));
    assert_eq!(summary.worst_rank, Some(301));
    assert_eq!(summary.avg_rank, 154);
    assert_eq!(summary.success_rate, 50);
}

#[test]
fn test_negative_rating_progress() {
    let bundle = ProfileBundle {
        rating_history: history(&[1500, 1300]),
        ..Default::default()
    };

    assert_eq!(compute_stats(&bundle).rating_progress, -200);
    assert_eq!(summarize_rating_history(&bundle.rating_history).change, -200);
}

#[test]
fn test_extreme_rating_history_saturates() {
    let bundle = parse_bundle_str(
        r#"{"ratingHistory":[-9223372036854775807, 9223372036854775807]}"#,
    )
    .unwrap();

    let stats = compute_stats(&bundle);
    assert_eq!(stats.rating_progress, i64::MAX);

    let summary = summarize_rating_history(&bundle.rating_history);
    assert_eq!(summary.max, i64::MAX);
    assert_eq!(summary.min, -i64::MAX);
}

#[test]
fn test_extreme_bucket_counts_saturate() {
    let bundle = parse_bundle_str(
        r#"{"problemBuckets":[
            {"rating":800,"count":9223372036854775807},
            {"rating":1200,"count":9223372036854775807},
            {"rating":3500,"count":9223372036854775807}
        ]}"#,
    )
    .unwrap();

    let stats = compute_stats(&bundle);
    assert_eq!(stats.total_solved, u64::MAX);
    assert_eq!(stats.max_solved_rating, 3500);
    assert!(stats.avg_rating >= 800 && stats.avg_rating <= 3500);
    assert_eq!(summarize_buckets(&bundle.problem_buckets).total, u64::MAX);
}

#[test]
fn test_extreme_contest_changes_saturate() {
    let bundle = parse_bundle_str(
        r#"{"contests":[
            {"name":"A","rank":1,"change":9223372036854775807},
            {"name":"B","rank":2,"change":1}
        ]}"#,
    )
    .unwrap();

    let stats = compute_stats(&bundle);
    assert_eq!(stats.contest_count, 2);
    assert_eq!(stats.best_rank, Some(1));

    let summary = summarize_contests(&bundle.contests);
    assert_eq!(summary.net_change, i64::MAX);
    assert_eq!(summary.success_rate, 100);
}
