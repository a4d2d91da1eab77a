//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default base URL of the student API
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable that overrides the API base URL
pub const API_URL_ENV: &str = "CF_ROSTER_API_URL";

/// Default timeout for API requests
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Current stats report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Public Codeforces profile prefix, handle is appended
pub const CODEFORCES_PROFILE_URL: &str = "https://codeforces.com/profile/";

/// Contest names longer than this are cut in short labels
pub const CONTEST_LABEL_MAX_CHARS: usize = 20;

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;

// Field names for bundle parsing (the API mixes camelCase and snake_case)
pub const PROFILE_FIELD_NAMES: &[&str] = &["profile", "student"];
pub const RATING_HISTORY_FIELD_NAMES: &[&str] = &["ratingHistory", "rating_history"];
pub const BUCKET_FIELD_NAMES: &[&str] = &["problemBuckets", "problem_buckets", "buckets"];
pub const HEATMAP_FIELD_NAMES: &[&str] = &["heatmap", "activity", "heatMap"];
pub const CONTEST_FIELD_NAMES: &[&str] = &["contests", "contestHistory", "contest_history"];

pub const ID_FIELD_NAMES: &[&str] = &["_id", "id"];
pub const NAME_FIELD_NAMES: &[&str] = &["name", "fullName"];
pub const EMAIL_FIELD_NAMES: &[&str] = &["email"];
pub const PHONE_FIELD_NAMES: &[&str] = &["phone", "phoneNumber"];
pub const HANDLE_FIELD_NAMES: &[&str] = &["cfHandle", "cf_handle", "handle"];
pub const CURRENT_RATING_FIELD_NAMES: &[&str] = &["currentRating", "current_rating"];
pub const MAX_RATING_FIELD_NAMES: &[&str] = &["maxRating", "max_rating"];
pub const LAST_SYNCED_FIELD_NAMES: &[&str] = &["lastSynced", "last_synced", "lastUpdated"];
pub const CONTEST_NAME_FIELD_NAMES: &[&str] = &["contestName", "contest_name", "name"];
pub const CONTEST_ID_FIELD_NAMES: &[&str] = &["contestId", "contest_id"];
pub const RATING_CHANGE_FIELD_NAMES: &[&str] = &["change", "ratingChange", "rating_change"];
