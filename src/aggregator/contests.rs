//! Contest table ordering and per-row classification.
//!
//! Rows are shown newest first unless a column is selected. Each row gets a
//! performance label from its rank and a highlight relative to the
//! student's other ranks.

use crate::parser::schema::Contest;
use crate::roster::sort::{SortDirection, SortState};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column the contest table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ContestSortField {
    Name,
    Rank,
    Change,
}

impl ContestSortField {
    pub fn header(&self) -> &'static str {
        match self {
            ContestSortField::Name => "CONTEST",
            ContestSortField::Rank => "RANK",
            ContestSortField::Change => "CHANGE",
        }
    }
}

/// Contests in display order
///
/// With no sort selected the input is reversed (newest first). A selected
/// column sorts stably in the chosen direction; contests without a valid
/// rank stay last in both directions.
pub fn sort_contests(
    contests: &[Contest],
    sort: Option<SortState<ContestSortField>>,
) -> Vec<&Contest> {
    let mut rows: Vec<&Contest> = contests.iter().collect();

    let Some(state) = sort else {
        rows.reverse();
        return rows;
    };

    debug!("Sorting {} contests by {:?} {:?}", rows.len(), state.field, state.direction);
    rows.sort_by(|a, b| compare_contests(a, b, state.field, state.direction));
    rows
}

fn compare_contests(
    a: &Contest,
    b: &Contest,
    field: ContestSortField,
    direction: SortDirection,
) -> Ordering {
    match field {
        ContestSortField::Name => direction.apply(a.name.cmp(&b.name)),
        ContestSortField::Change => direction.apply(a.change.cmp(&b.change)),
        ContestSortField::Rank => match (a.valid_rank(), b.valid_rank()) {
            (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Performance label for a single contest rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestPerformance {
    Unranked,
    Exceptional,
    Excellent,
    Good,
    Average,
    BelowAverage,
}

impl ContestPerformance {
    /// Absent and non-positive ranks are `Unranked`
    pub fn from_rank(rank: Option<u64>) -> Self {
        match rank {
            None | Some(0) => ContestPerformance::Unranked,
            Some(1..=100) => ContestPerformance::Exceptional,
            Some(101..=500) => ContestPerformance::Excellent,
            Some(501..=2000) => ContestPerformance::Good,
            Some(2001..=5000) => ContestPerformance::Average,
            Some(_) => ContestPerformance::BelowAverage,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContestPerformance::Unranked => "N/A",
            ContestPerformance::Exceptional => "Exceptional",
            ContestPerformance::Excellent => "Excellent",
            ContestPerformance::Good => "Good",
            ContestPerformance::Average => "Average",
            ContestPerformance::BelowAverage => "Below Average",
        }
    }
}

/// How a rank compares with the student's other ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankHighlight {
    Unranked,
    Best,
    TopQuarter,
    BottomQuarter,
    Normal,
}

/// Classifies ranks against every valid rank of one contest history
#[derive(Debug, Clone, Default)]
pub struct RankHighlighter {
    sorted: Vec<u64>,
}

impl RankHighlighter {
    pub fn new(contests: &[Contest]) -> Self {
        let mut sorted: Vec<u64> = contests.iter().filter_map(Contest::valid_rank).collect();
        sorted.sort_unstable();
        Self { sorted }
    }

    /// Best rank first, then top quarter, then bottom quarter
    ///
    /// The quarter cut-offs are the ranks at index `len / 4` and
    /// `len * 3 / 4` of the ascending rank list.
    pub fn classify(&self, rank: Option<u64>) -> RankHighlight {
        let Some(rank) = rank.filter(|r| *r > 0) else {
            return RankHighlight::Unranked;
        };
        let Some(&best) = self.sorted.first() else {
            return RankHighlight::Normal;
        };

        let len = self.sorted.len();
        if rank == best {
            RankHighlight::Best
        } else if rank <= self.sorted[len / 4] {
            RankHighlight::TopQuarter
        } else if rank >= self.sorted[len * 3 / 4] {
            RankHighlight::BottomQuarter
        } else {
            RankHighlight::Normal
        }
    }
}
