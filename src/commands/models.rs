use crate::aggregator::ContestSortField;
use crate::roster::{FormPatch, SortDirection, SortField, SortState, StudentForm};
use crate::utils::config::DEFAULT_API_URL;
use std::path::PathBuf;

/// Arguments for the show command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ShowArgs {
    /// Student API base URL
    pub api_url: String,

    /// Student to profile
    pub student_id: String,

    /// Output path for the JSON stats report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the activity heatmap
    pub show_heatmap: bool,

    /// Print the contest table
    pub show_contests: bool,

    /// Contest table column; `None` keeps newest first
    pub contest_sort: Option<SortState<ContestSortField>>,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            student_id: String::new(),
            output_json: None,
            show_heatmap: false,
            show_contests: false,
            contest_sort: None,
        }
    }
}

/// Arguments for the offline stats command
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Saved profile bundle JSON
    pub input: PathBuf,

    /// Output path for the JSON stats report (optional)
    pub output_json: Option<PathBuf>,

    pub show_heatmap: bool,
    pub show_contests: bool,
    pub contest_sort: Option<SortState<ContestSortField>>,
}

/// Arguments for the list command
#[derive(Debug, Clone)]
pub struct ListArgs {
    pub api_url: String,

    /// Search text matched against name, email and handle
    pub query: String,

    pub sort: SortState,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            query: String::new(),
            sort: SortState::default(),
        }
    }
}

impl ListArgs {
    pub fn with_sort(mut self, field: SortField, descending: bool) -> Self {
        self.sort = SortState::new(field, direction_of(descending));
        self
    }
}

/// Contest table sort from the `--contest-sort` / `--contest-desc` flags
pub fn contest_sort_from_flags(
    field: Option<ContestSortField>,
    descending: bool,
) -> Option<SortState<ContestSortField>> {
    field.map(|field| SortState::new(field, direction_of(descending)))
}

fn direction_of(descending: bool) -> SortDirection {
    if descending {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

/// Arguments for the add command
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub api_url: String,
    pub form: StudentForm,
}

/// Arguments for the edit command
#[derive(Debug, Clone)]
pub struct EditArgs {
    pub api_url: String,
    pub student_id: String,
    pub patch: FormPatch,
}
