//! CF Roster CLI
//!
//! Tracks the Codeforces progress of a roster of students through the
//! student API: list, profile stats, create/edit/delete and sync.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use cf_roster::aggregator::ContestSortField;
use cf_roster::commands::{
    contest_sort_from_flags, default_report_path, display_version, execute_add, execute_delete,
    execute_edit, execute_list, execute_show, execute_stats, execute_sync, validate_report_file,
    AddArgs, EditArgs, ListArgs, ShowArgs, StatsArgs,
};
use cf_roster::roster::{FormPatch, SortField, StudentForm};
use cf_roster::utils::config::{API_URL_ENV, DEFAULT_API_URL};

/// CF Roster - Codeforces progress for a roster of students
#[derive(Parser, Debug)]
#[command(name = "cf-roster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Student API base URL
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List students on the roster
    List {
        /// Filter by name, email or handle
        #[arg(short, long, default_value = "")]
        search: String,

        /// Column to sort by
        #[arg(long, value_enum, default_value = "name")]
        sort: SortField,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show a student's profile and statistics
    Show {
        /// Student id
        id: String,

        /// Output path for the JSON stats report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report to stats-<ID>.json
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Print the activity heatmap
        #[arg(long)]
        heatmap: bool,

        /// Print the contest table
        #[arg(long)]
        contests: bool,

        /// Contest table column (default: newest first)
        #[arg(long, value_enum)]
        contest_sort: Option<ContestSortField>,

        /// Sort the contest table descending
        #[arg(long, requires = "contest_sort")]
        contest_desc: bool,
    },

    /// Add a student
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        /// Codeforces handle
        #[arg(long, default_value = "")]
        handle: String,
    },

    /// Edit a student (only the given fields change)
    Edit {
        /// Student id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Codeforces handle
        #[arg(long)]
        handle: Option<String>,
    },

    /// Delete a student
    Delete {
        /// Student id
        id: String,
    },

    /// Trigger a Codeforces data sync on the server
    Sync,

    /// Compute statistics from a saved profile bundle (no network)
    Stats {
        /// Path to profile bundle JSON
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for the JSON stats report
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        heatmap: bool,

        #[arg(long)]
        contests: bool,

        /// Contest table column (default: newest first)
        #[arg(long, value_enum)]
        contest_sort: Option<ContestSortField>,

        /// Sort the contest table descending
        #[arg(long, requires = "contest_sort")]
        contest_desc: bool,
    },

    /// Validate a stats report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::List { search, sort, desc } => {
            let args = ListArgs {
                api_url: cli.api,
                query: search,
                ..Default::default()
            }
            .with_sort(sort, desc);
            execute_list(args)?;
        }

        Commands::Show {
            id,
            output,
            save,
            heatmap,
            contests,
            contest_sort,
            contest_desc,
        } => {
            let output_json = if save {
                Some(default_report_path(&id))
            } else {
                output
            };
            execute_show(ShowArgs {
                api_url: cli.api,
                student_id: id,
                output_json,
                show_heatmap: heatmap,
                show_contests: contests,
                contest_sort: contest_sort_from_flags(contest_sort, contest_desc),
            })?;
        }

        Commands::Add {
            name,
            email,
            phone,
            handle,
        } => {
            execute_add(AddArgs {
                api_url: cli.api,
                form: StudentForm {
                    name,
                    email,
                    phone,
                    cf_handle: handle,
                },
            })?;
        }

        Commands::Edit {
            id,
            name,
            email,
            phone,
            handle,
        } => {
            execute_edit(EditArgs {
                api_url: cli.api,
                student_id: id,
                patch: FormPatch {
                    name,
                    email,
                    phone,
                    cf_handle: handle,
                },
            })?;
        }

        Commands::Delete { id } => {
            execute_delete(&cli.api, &id)?;
        }

        Commands::Sync => {
            execute_sync(&cli.api)?;
        }

        Commands::Stats {
            file,
            output,
            heatmap,
            contests,
            contest_sort,
            contest_desc,
        } => {
            execute_stats(StatsArgs {
                input: file,
                output_json: output,
                show_heatmap: heatmap,
                show_contests: contests,
                contest_sort: contest_sort_from_flags(contest_sort, contest_desc),
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_save_conflicts_with_output() {
        assert!(Cli::try_parse_from(["cf-roster", "show", "65a1f0", "--save"]).is_ok());
        assert!(
            Cli::try_parse_from(["cf-roster", "show", "65a1f0", "--save", "-o", "x.json"]).is_err()
        );
    }

    #[test]
    fn test_contest_desc_requires_contest_sort() {
        let desc_only = ["cf-roster", "stats", "-f", "b.json", "--contest-desc"];
        assert!(Cli::try_parse_from(desc_only).is_err());

        let cli = Cli::try_parse_from([
            "cf-roster",
            "stats",
            "-f",
            "b.json",
            "--contest-sort",
            "rank",
            "--contest-desc",
        ])
        .unwrap();
        match cli.command {
            Commands::Stats {
                contest_sort,
                contest_desc,
                ..
            } => {
                assert_eq!(contest_sort, Some(ContestSortField::Rank));
                assert!(contest_desc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
