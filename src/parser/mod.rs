//! Profile bundle parsing and schema definitions.
//!
//! This module handles:
//! - Parsing the loosely typed JSON returned by the student API
//! - Coercing malformed numbers and missing collections to defaults
//! - Defining the typed records the aggregator works on

pub mod bundle;
pub mod schema;

// Re-export main types
pub use bundle::{coerce_count, coerce_int, parse_bundle, parse_bundle_str, parse_profile};
pub use schema::{Contest, ProblemBucket, ProfileBundle, RatingPoint, StudentProfile};
