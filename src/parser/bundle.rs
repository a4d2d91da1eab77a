//! Lenient parser for the profile bundle returned by the student API.
//!
//! The API is loosely typed: collections may be missing, ratings may arrive
//! as strings, ranks may be null. This is the one place where all of that
//! is resolved into the typed records in [`super::schema`].

use super::schema::{Contest, ProblemBucket, ProfileBundle, RatingPoint, StudentProfile};
use crate::utils::config::{
    BUCKET_FIELD_NAMES, CONTEST_FIELD_NAMES, CONTEST_ID_FIELD_NAMES, CONTEST_NAME_FIELD_NAMES,
    CURRENT_RATING_FIELD_NAMES, EMAIL_FIELD_NAMES, HANDLE_FIELD_NAMES, HEATMAP_FIELD_NAMES,
    ID_FIELD_NAMES, LAST_SYNCED_FIELD_NAMES, MAX_RATING_FIELD_NAMES, NAME_FIELD_NAMES,
    PHONE_FIELD_NAMES, PROFILE_FIELD_NAMES, RATING_CHANGE_FIELD_NAMES,
    RATING_HISTORY_FIELD_NAMES,
};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};

/// Parse a profile bundle from raw JSON text
///
/// **Public** - used by the offline `stats` command
///
/// # Errors
/// * `ParseError::JsonError` - Text is not valid JSON
/// * `ParseError::InvalidFormat` - Top-level value is not an object
pub fn parse_bundle_str(raw: &str) -> Result<ProfileBundle, ParseError> {
    let value: Value = serde_json::from_str(raw)?;
    parse_bundle(&value)
}

/// Parse a profile bundle from a JSON value
///
/// **Public** - main entry point for parsing
///
/// Only a non-object top-level value is rejected. Everything below the top
/// level is coerced: absent collections become empty, unparsable numbers
/// become 0, invalid ranks become `None`.
pub fn parse_bundle(raw: &Value) -> Result<ProfileBundle, ParseError> {
    let root = raw.as_object().ok_or_else(|| {
        ParseError::InvalidFormat("Profile bundle must be a JSON object".to_string())
    })?;

    let profile = parse_profile(root);

    let rating_history: Vec<RatingPoint> = array_field(root, RATING_HISTORY_FIELD_NAMES)
        .iter()
        .map(parse_rating_point)
        .collect();

    let problem_buckets: Vec<ProblemBucket> = array_field(root, BUCKET_FIELD_NAMES)
        .iter()
        .map(parse_bucket)
        .collect();

    let heatmap: Vec<u64> = array_field(root, HEATMAP_FIELD_NAMES)
        .iter()
        .map(parse_activity_day)
        .collect();

    let contests: Vec<Contest> = array_field(root, CONTEST_FIELD_NAMES)
        .iter()
        .map(parse_contest)
        .collect();

    debug!(
        "Parsed bundle for {:?}: {} rating points, {} buckets, {} days, {} contests",
        profile.name,
        rating_history.len(),
        problem_buckets.len(),
        heatmap.len(),
        contests.len()
    );

    Ok(ProfileBundle {
        profile,
        rating_history,
        problem_buckets,
        heatmap,
        contests,
    })
}

/// Parse student identity, preferring the nested `profile` object and
/// falling back to top-level fields
///
/// **Public** - also used for the plain student records of the list view
pub fn parse_profile(root: &Map<String, Value>) -> StudentProfile {
    let nested = find_field(root, PROFILE_FIELD_NAMES).and_then(Value::as_object);

    let lookup = |names: &[&str]| lookup_profile_field(nested, root, names);

    StudentProfile {
        id: lookup(ID_FIELD_NAMES).map(coerce_string).unwrap_or_default(),
        name: lookup(NAME_FIELD_NAMES).map(coerce_string).unwrap_or_default(),
        email: lookup(EMAIL_FIELD_NAMES).map(coerce_string).unwrap_or_default(),
        phone: lookup(PHONE_FIELD_NAMES).map(coerce_string).unwrap_or_default(),
        cf_handle: lookup(HANDLE_FIELD_NAMES).map(coerce_string).unwrap_or_default(),
        current_rating: lookup(CURRENT_RATING_FIELD_NAMES).and_then(coerce_optional_int),
        max_rating: lookup(MAX_RATING_FIELD_NAMES).and_then(coerce_optional_int),
        last_synced: lookup(LAST_SYNCED_FIELD_NAMES)
            .map(coerce_string)
            .filter(|s| !s.is_empty()),
    }
}

fn lookup_profile_field<'a>(
    nested: Option<&'a Map<String, Value>>,
    root: &'a Map<String, Value>,
    names: &[&str],
) -> Option<&'a Value> {
    nested
        .and_then(|obj| find_field(obj, names))
        .filter(|v| !is_blank(v))
        .or_else(|| find_field(root, names))
}

fn parse_rating_point(value: &Value) -> RatingPoint {
    let Some(obj) = value.as_object() else {
        // A bare number is a rating with no metadata
        return RatingPoint::with_rating(coerce_int(value));
    };

    RatingPoint {
        date: find_field(obj, &["date", "time"]).map(coerce_string).unwrap_or_default(),
        rating: find_field(obj, &["rating", "newRating"]).map(coerce_int).unwrap_or(0),
        contest_name: find_field(obj, CONTEST_NAME_FIELD_NAMES)
            .map(coerce_string)
            .unwrap_or_default(),
        contest_id: find_field(obj, CONTEST_ID_FIELD_NAMES).and_then(coerce_optional_int),
    }
}

fn parse_bucket(value: &Value) -> ProblemBucket {
    let obj = value.as_object();
    let field = |name: &str| obj.and_then(|o| o.get(name));

    ProblemBucket {
        rating: field("rating").map(coerce_int).unwrap_or(0),
        count: field("count").map(coerce_count).unwrap_or(0),
    }
}

fn parse_activity_day(value: &Value) -> u64 {
    match value {
        Value::Object(obj) => obj.get("count").map(coerce_count).unwrap_or(0),
        other => coerce_count(other),
    }
}

fn parse_contest(value: &Value) -> Contest {
    let Some(obj) = value.as_object() else {
        warn!("Skipping malformed contest entry: {}", value);
        return Contest::default();
    };

    Contest {
        name: find_field(obj, CONTEST_NAME_FIELD_NAMES)
            .map(coerce_string)
            .unwrap_or_default(),
        rank: obj.get("rank").and_then(parse_rank),
        change: find_field(obj, RATING_CHANGE_FIELD_NAMES).map(coerce_int).unwrap_or(0),
        unsolved: obj.get("unsolved").map(coerce_count).unwrap_or(0),
        problems: obj.get("problems").map(coerce_count).unwrap_or(0),
    }
}

/// Rank is valid only when it is a positive integer
fn parse_rank(value: &Value) -> Option<u64> {
    coerce_optional_int(value)
        .filter(|r| *r > 0)
        .map(|r| r as u64)
}

/// First present, non-null field among the aliases
fn find_field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| obj.get(*name))
        .find(|v| !v.is_null())
}

fn array_field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> &'a [Value] {
    match find_field(obj, names) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            warn!("Expected array for {:?}, got {}; treating as empty", names, other);
            &[]
        }
        None => &[],
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Coerce a JSON value to an integer, defaulting to 0
///
/// **Public** - shared with the roster view
///
/// Numbers are truncated toward zero. Strings take their leading integer
/// (`"1600+"` is 1600). Everything else is 0.
pub fn coerce_int(value: &Value) -> i64 {
    coerce_optional_int(value).unwrap_or(0)
}

/// Like [`coerce_int`] but distinguishes "nothing usable" from zero
pub fn coerce_optional_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

/// Coerce to a non-negative count; negatives clamp to 0
pub fn coerce_count(value: &Value) -> u64 {
    let n = coerce_int(value);
    if n < 0 {
        debug!("Clamping negative count {} to 0", n);
        0
    } else {
        n as u64
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Parse an optional sign followed by digits, ignoring whatever follows
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
