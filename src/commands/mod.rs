//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod profile;
pub mod students;
pub mod utils;

// Re-export main command functions
pub use models::{
    contest_sort_from_flags, AddArgs, EditArgs, ListArgs, ShowArgs, StatsArgs,
};
pub use profile::{default_report_path, execute_show, execute_stats, validate_show_args};
pub use students::{execute_add, execute_delete, execute_edit, execute_list, execute_sync};
pub use utils::{display_version, validate_api_url, validate_report_file};
