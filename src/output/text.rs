//! Terminal rendering for the roster and profile views.
//!
//! Ratings are coloured by Codeforces tier; everything else is plain text
//! so the output stays readable when piped.

use crate::aggregator::{
    contest_short_label, heat_levels, sort_contests, summarize_contests, ContestPerformance,
    ContestSortField, RankHighlight, RankHighlighter, RatingTier, StudentStats,
};
use crate::parser::schema::{Contest, ProfileBundle, StudentProfile};
use crate::roster::sort::SortState;
use crate::utils::config::CODEFORCES_PROFILE_URL;
use chrono::{Duration, NaiveDate};
use colored::*;

const RULE: &str = "---------------------------------------------------";

/// Terminal colour for a rating tier
pub fn tier_color(tier: RatingTier) -> Color {
    match tier {
        RatingTier::Unrated => Color::White,
        RatingTier::Newbie => Color::BrightBlack,
        RatingTier::Pupil => Color::Green,
        RatingTier::Specialist => Color::Cyan,
        RatingTier::Expert => Color::Blue,
        RatingTier::CandidateMaster => Color::Magenta,
        RatingTier::Master => Color::Yellow,
        RatingTier::Grandmaster => Color::Red,
    }
}

fn colored_rating(rating: Option<i64>, width: usize) -> String {
    match rating.filter(|r| *r > 0) {
        Some(r) => format!("{:>width$}", r, width = width)
            .color(tier_color(RatingTier::from_rating(r)))
            .to_string(),
        None => format!("{:>width$}", "N/A", width = width).dimmed().to_string(),
    }
}

fn cut(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    } else {
        text.to_string()
    }
}

/// Render the student list
///
/// `query` is only used to word the empty-result message.
pub fn render_roster_table(students: &[&StudentProfile], query: &str) -> String {
    let mut out = String::new();

    if students.is_empty() {
        if query.trim().is_empty() {
            out.push_str("No students enrolled yet. Add one with `cf-roster add`.\n");
        } else {
            out.push_str(&format!("No students found matching \"{}\"\n", query.trim()));
        }
        return out;
    }

    out.push_str(&"Student Dashboard".bold().to_string());
    out.push('\n');
    out.push_str(&format!(
        "{:<24} {:<28} {:<18} {:>8} {:>8}  {}\n",
        "NAME", "EMAIL", "CF HANDLE", "RATING", "MAX", "ID"
    ));

    for student in students {
        let handle = if student.cf_handle.is_empty() {
            "Not set".to_string()
        } else {
            student.cf_handle.clone()
        };
        out.push_str(&format!(
            "{:<24} {:<28} {:<18} {} {}  {}\n",
            cut(&student.name, 24),
            cut(&student.email, 28),
            cut(&handle, 18),
            colored_rating(student.current_rating, 8),
            colored_rating(student.max_rating, 8),
            student.id
        ));
    }

    out.push_str(&format!("\n{} student(s)\n", students.len()));
    out
}

/// Render the profile header and summary cards
pub fn render_profile_summary(bundle: &ProfileBundle, stats: &StudentStats) -> String {
    let profile = &bundle.profile;
    let mut out = String::new();

    out.push('\n');
    out.push_str(&profile.display_name().bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    let email = if profile.email.is_empty() {
        "No email provided"
    } else {
        profile.email.as_str()
    };
    out.push_str(&format!("Email:    {}\n", email));
    if !profile.cf_handle.is_empty() {
        out.push_str(&format!(
            "Handle:   {} ({}{})\n",
            profile.cf_handle, CODEFORCES_PROFILE_URL, profile.cf_handle
        ));
    }
    if let Some(rating) = profile.current_rating {
        out.push_str(&format!(
            "Rating:   {} ({})\n",
            colored_rating(Some(rating), 0),
            RatingTier::from_rating(rating).label()
        ));
    }
    if let Some(synced) = &profile.last_synced {
        out.push_str(&format!("Synced:   {}\n", synced));
    }
    out.push_str(RULE);
    out.push('\n');

    out.push_str(&format!(
        "Problems Solved:  {}  (avg tier {})\n",
        stats.total_solved, stats.avg_rating
    ));

    out.push_str(&format!(
        "Hardest Solved:   {}",
        colored_rating(Some(stats.max_solved_rating), 0)
    ));
    if stats.rating_progress > 0 {
        out.push_str(&format!("  (+{} gain)", stats.rating_progress));
    } else if stats.rating_progress < 0 {
        out.push_str(&format!("  ({} loss)", stats.rating_progress));
    }
    out.push('\n');

    out.push_str(&format!("Contests:         {}", stats.contest_count));
    if let Some(rank) = stats.best_rank {
        let contest = if stats.best_rank_contest.is_empty() {
            "contest"
        } else {
            stats.best_rank_contest.as_str()
        };
        out.push_str(&format!("  (best rank {} in {})", rank, contest));
    }
    out.push('\n');

    out.push_str(&format!(
        "Activity:         {} active days, {:.1} per day\n",
        stats.active_days, stats.avg_per_day
    ));
    out.push_str(&format!(
        "Streak:           {} days (max {} days)\n",
        stats.current_streak, stats.max_streak
    ));

    out
}

/// Render the activity heatmap, one row per week
///
/// The last entry of `heatmap` is `today`; earlier entries step back one
/// day each.
pub fn render_heatmap(heatmap: &[u64], today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str("\nActivity Heatmap\n");

    if heatmap.is_empty() {
        out.push_str("  No activity recorded\n");
        return out;
    }

    let levels = heat_levels(heatmap);
    let first_day = today - Duration::days(heatmap.len() as i64 - 1);

    for (week, chunk) in levels.chunks(7).enumerate() {
        let start = first_day + Duration::days(week as i64 * 7);
        let cells: String = chunk.iter().map(|l| l.glyph()).collect();
        out.push_str(&format!("  {} {}\n", start.format("%b %d"), cells));
    }

    out.push_str(&format!(
        "  {} none  {} low  {} light  {} medium  {} high  {} max\n",
        '·', '░', '▒', '▓', '█', '■'
    ));
    out
}

/// Render the contest table
///
/// Rows are newest first unless `sort` selects a column. Ranks are shaded
/// against the student's other ranks and every row carries a performance
/// label.
pub fn render_contest_table(
    contests: &[Contest],
    sort: Option<SortState<ContestSortField>>,
) -> String {
    let mut out = String::new();
    out.push_str("\nContest History\n");

    if contests.is_empty() {
        out.push_str("  No contests yet\n");
        return out;
    }

    let header = |field: ContestSortField| match sort {
        Some(state) if state.field == field => {
            format!("{}{}", field.header(), state.direction.indicator())
        }
        _ => field.header().to_string(),
    };
    out.push_str(&format!(
        "  {:<24} {:>7} {:>7} {:>9}  {}\n",
        header(ContestSortField::Name),
        header(ContestSortField::Rank),
        header(ContestSortField::Change),
        "SOLVED",
        "PERFORMANCE"
    ));

    let highlighter = RankHighlighter::new(contests);
    for contest in sort_contests(contests, sort) {
        let rank = shade_rank(contest.valid_rank(), &highlighter);
        let change = format!("{:>+7}", contest.change);
        let change = match contest.change {
            c if c > 0 => change.green().to_string(),
            c if c < 0 => change.red().to_string(),
            _ => change.dimmed().to_string(),
        };
        let solved = contest.problems.saturating_sub(contest.unsolved);
        out.push_str(&format!(
            "  {:<24} {} {} {:>9}  {}\n",
            contest_short_label(&contest.name),
            rank,
            change,
            format!("{}/{}", solved, contest.problems),
            performance_label(ContestPerformance::from_rank(contest.valid_rank()))
        ));
    }

    let summary = summarize_contests(contests);
    out.push_str(&format!(
        "\n  {} contests | {} rating gains | success rate {}% | net {:+} | avg rank {}\n",
        summary.total_contests,
        summary.positive_changes,
        summary.success_rate,
        summary.net_change,
        summary.avg_rank
    ));
    if let (Some(best), Some(worst)) = (summary.best_rank, summary.worst_rank) {
        out.push_str(&format!("  best rank {} | worst rank {}\n", best, worst));
    }

    out
}

fn shade_rank(rank: Option<u64>, highlighter: &RankHighlighter) -> String {
    let cell = match rank {
        Some(r) => format!("{:>7}", r),
        None => format!("{:>7}", "-"),
    };
    match highlighter.classify(rank) {
        RankHighlight::Unranked => cell.dimmed().to_string(),
        RankHighlight::Best => cell.green().bold().to_string(),
        RankHighlight::TopQuarter => cell.blue().bold().to_string(),
        RankHighlight::BottomQuarter => cell.yellow().bold().to_string(),
        RankHighlight::Normal => cell,
    }
}

fn performance_label(performance: ContestPerformance) -> String {
    let label = performance.label();
    match performance {
        ContestPerformance::Unranked => label.dimmed().to_string(),
        ContestPerformance::Exceptional => label.magenta().to_string(),
        ContestPerformance::Excellent => label.blue().to_string(),
        ContestPerformance::Good => label.green().to_string(),
        ContestPerformance::Average => label.yellow().to_string(),
        ContestPerformance::BelowAverage => label.red().to_string(),
    }
}
