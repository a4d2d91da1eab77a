//! CF Roster
//!
//! Codeforces progress tracking for a roster of students.
//!
//! This crate provides the core implementation for the
//! `cf-roster` CLI tool: a client for the student API, a lenient
//! parser for its profile bundles, and the statistics shown on a
//! student's profile page.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install cf-roster
//! cf-roster --api http://localhost:5000/api list
//! cf-roster show <STUDENT_ID> --heatmap --contests
//! ```
//!
//! The statistics are a pure function of a bundle and can be used
//! without any network access:
//!
//! ```
//! use cf_roster::aggregator::compute_stats;
//! use cf_roster::parser::parse_bundle_str;
//!
//! let bundle = parse_bundle_str(r#"{ "heatmap": [1, 0, 2, 3] }"#).unwrap();
//! let stats = compute_stats(&bundle);
//! assert_eq!(stats.current_streak, 2);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod roster;
pub mod rpc;
pub mod utils;
