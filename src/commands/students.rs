//! Roster commands: list, add, edit, delete and sync.

use super::models::{AddArgs, EditArgs, ListArgs};
use super::utils::validate_api_url;
use crate::output::render_roster_table;
use crate::parser::schema::StudentProfile;
use crate::roster::{filter_students, sort_students, validate_student, StudentForm};
use crate::rpc::ApiClient;
use crate::utils::error::ValidationError;
use anyhow::{Context, Result};
use log::{info, warn};

/// Execute the list command
///
/// **Public** - fetches, sorts, filters and prints the roster
pub fn execute_list(args: ListArgs) -> Result<Vec<StudentProfile>> {
    validate_api_url(&args.api_url)?;

    let client = ApiClient::new(&args.api_url).context("Failed to create API client")?;
    let mut students = client
        .list_students()
        .context("Failed to load students. Please try again.")?;

    sort_students(&mut students, args.sort);
    let visible = filter_students(&students, &args.query);

    println!("{}", render_roster_table(&visible, &args.query));

    Ok(visible.into_iter().cloned().collect())
}

/// Execute the add command
pub fn execute_add(args: AddArgs) -> Result<StudentProfile> {
    validate_api_url(&args.api_url)?;
    ensure_valid(&args.form)?;

    let client = ApiClient::new(&args.api_url).context("Failed to create API client")?;
    let created = client
        .create_student(&args.form)
        .context("Failed to add student")?;

    println!("✓ Student added successfully! (id {})", created.id);
    Ok(created)
}

/// Execute the edit command
///
/// Fetches the current record, applies the provided fields, validates the
/// merged form and sends the update.
pub fn execute_edit(args: EditArgs) -> Result<StudentProfile> {
    validate_api_url(&args.api_url)?;

    if args.patch.is_empty() {
        anyhow::bail!("Nothing to update: pass at least one of --name, --email, --phone, --handle");
    }

    let client = ApiClient::new(&args.api_url).context("Failed to create API client")?;
    let existing = client
        .get_student(&args.student_id)
        .context("Failed to load student data")?;

    let mut form = StudentForm::from_profile(&existing);
    form.apply(args.patch);
    ensure_valid(&form)?;

    let updated = client
        .update_student(&args.student_id, &form)
        .context("Failed to update student")?;

    println!("✓ Student updated successfully!");
    Ok(updated)
}

/// Execute the delete command
pub fn execute_delete(api_url: &str, student_id: &str) -> Result<()> {
    validate_api_url(api_url)?;

    let client = ApiClient::new(api_url).context("Failed to create API client")?;
    client
        .delete_student(student_id)
        .with_context(|| format!("Failed to delete student {}", student_id))?;

    println!("✓ Student {} deleted", student_id.trim());
    Ok(())
}

/// Execute the sync command
pub fn execute_sync(api_url: &str) -> Result<()> {
    validate_api_url(api_url)?;

    let client = ApiClient::new(api_url).context("Failed to create API client")?;
    let response = client.trigger_sync().context("Failed to trigger sync")?;

    info!("Sync response: {}", response);
    println!("✓ Codeforces sync triggered");
    Ok(())
}

/// Fail with every validation message at once
///
/// **Private** - shared by add and edit
fn ensure_valid(form: &StudentForm) -> Result<()> {
    let errors = validate_student(form);
    if errors.is_empty() {
        return Ok(());
    }

    for error in &errors {
        warn!("{}", error);
    }
    anyhow::bail!("Invalid student: {}", join_errors(&errors))
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_valid_reports_all_errors() {
        let form = StudentForm::default();
        let err = ensure_valid(&form).unwrap_err().to_string();
        assert!(err.contains("Name is required"));
        assert!(err.contains("Email is required"));
    }

    #[test]
    fn test_execute_add_rejects_invalid_form_before_network() {
        let args = AddArgs {
            api_url: "http://localhost:5000/api".to_string(),
            form: StudentForm {
                name: "Ana".to_string(),
                email: "not-an-email".to_string(),
                ..Default::default()
            },
        };
        let err = execute_add(args).unwrap_err().to_string();
        assert!(err.contains("Email format is invalid"));
    }
}
