//! Typed records for the student API's profile bundle.
//!
//! Every field here already has its default applied. Absent or malformed
//! wire data is resolved by the bundle parser, so the aggregator never
//! has to second-guess a value.

use serde::{Deserialize, Serialize};

/// Number of problems solved at one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemBucket {
    /// Difficulty tier (e.g. 800, 1200, 1900)
    pub rating: i64,

    /// Problems solved at that tier
    pub count: u64,
}

impl ProblemBucket {
    pub fn new(rating: i64, count: u64) -> Self {
        Self { rating, count }
    }
}

/// One point of the rating history chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPoint {
    /// Date as sent by the API (opaque to the aggregator)
    pub date: String,

    /// Rating after the contest
    pub rating: i64,

    pub contest_name: String,

    pub contest_id: Option<i64>,
}

impl RatingPoint {
    /// Point with only a rating, handy for tests and synthetic histories
    pub fn with_rating(rating: i64) -> Self {
        Self {
            rating,
            ..Default::default()
        }
    }
}

/// One row of the contest table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub name: String,

    /// Final standing; `None` when the API sent nothing usable
    pub rank: Option<u64>,

    /// Rating delta caused by the contest
    pub change: i64,

    /// Problems left unsolved
    pub unsolved: u64,

    /// Problems in the contest
    pub problems: u64,
}

impl Contest {
    /// Rank if it is a valid positive number
    pub fn valid_rank(&self) -> Option<u64> {
        self.rank.filter(|r| *r > 0)
    }
}

/// Student identity and cached Codeforces ratings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cf_handle: String,
    pub current_rating: Option<i64>,
    pub max_rating: Option<i64>,
    pub last_synced: Option<String>,
}

impl StudentProfile {
    /// Display name, falling back to a generic label
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Student"
        } else {
            &self.name
        }
    }
}

/// Everything the profile view needs for one student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBundle {
    pub profile: StudentProfile,

    /// Chronological, oldest first
    pub rating_history: Vec<RatingPoint>,

    /// Display order only
    pub problem_buckets: Vec<ProblemBucket>,

    /// Problems solved per day, oldest first, one entry per calendar day
    pub heatmap: Vec<u64>,

    pub contests: Vec<Contest>,
}
