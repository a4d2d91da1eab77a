use cf_roster::aggregator::ContestSortField;
use cf_roster::commands::{
    contest_sort_from_flags, execute_stats, validate_api_url, validate_show_args, ListArgs,
    ShowArgs, StatsArgs,
};
use cf_roster::output::read_report;
use cf_roster::roster::{SortDirection, SortField};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_validate_show_args_valid() {
    let args = ShowArgs {
        api_url: "http://localhost:5000/api".to_string(),
        student_id: "65a1f0".to_string(),
        ..Default::default()
    };

    assert!(validate_show_args(&args).is_ok());
}

#[test]
fn test_validate_show_args_empty_api() {
    let args = ShowArgs {
        api_url: String::new(),
        student_id: "65a1f0".to_string(),
        ..Default::default()
    };

    assert!(validate_show_args(&args).is_err());
}

#[test]
fn test_validate_show_args_invalid_scheme() {
    let args = ShowArgs {
        api_url: "ftp://localhost:5000/api".to_string(),
        student_id: "65a1f0".to_string(),
        ..Default::default()
    };

    assert!(validate_show_args(&args).is_err());
}

#[test]
fn test_validate_show_args_output_is_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ShowArgs {
        student_id: "65a1f0".to_string(),
        output_json: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_show_args(&args).is_err());
}

#[test]
fn test_validate_api_url_https() {
    assert!(validate_api_url("https://roster.example.org/api").is_ok());
}

#[test]
fn test_list_args_with_sort() {
    let args = ListArgs::default().with_sort(SortField::CurrentRating, true);
    assert_eq!(args.sort.field, SortField::CurrentRating);
    assert_eq!(args.sort.direction, SortDirection::Desc);
}

#[test]
fn test_execute_stats_from_file() {
    let mut bundle_file = NamedTempFile::new().unwrap();
    write!(
        bundle_file,
        r#"{{
            "profile": {{ "name": "Ana", "cfHandle": "ana_r" }},
            "problemBuckets": [{{ "rating": 1200, "count": 2 }}, {{ "rating": 1900, "count": 3 }}],
            "heatmap": [1, 0, 1, 1, 1, 0, 1],
            "contests": [{{ "name": "Round A", "rank": 50 }}, {{ "name": "Round B", "rank": 5 }}]
        }}"#
    )
    .unwrap();

    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("stats.json");

    let report = execute_stats(StatsArgs {
        input: bundle_file.path().to_path_buf(),
        output_json: Some(out_path.clone()),
        show_heatmap: true,
        show_contests: true,
        contest_sort: contest_sort_from_flags(Some(ContestSortField::Rank), false),
    })
    .unwrap();

    assert_eq!(report.stats.total_solved, 5);
    assert_eq!(report.stats.avg_rating, 1620);
    assert_eq!(report.stats.max_streak, 3);
    assert_eq!(report.stats.current_streak, 1);
    assert_eq!(report.stats.best_rank_contest, "Round B");

    let saved = read_report(&out_path).unwrap();
    assert_eq!(saved.cf_handle, "ana_r");
}

#[test]
fn test_contest_sort_from_flags() {
    assert_eq!(contest_sort_from_flags(None, true), None);

    let sort = contest_sort_from_flags(Some(ContestSortField::Change), true).unwrap();
    assert_eq!(sort.field, ContestSortField::Change);
    assert_eq!(sort.direction, SortDirection::Desc);
}

#[test]
fn test_execute_stats_missing_file() {
    let result = execute_stats(StatsArgs {
        input: PathBuf::from("/nonexistent/bundle.json"),
        ..Default::default()
    });
    assert!(result.is_err());
}
