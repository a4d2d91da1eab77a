//! Student list view and the create/edit form.
//!
//! - Sorting by column with toggling direction
//! - Case-insensitive search over name, email and handle
//! - Form validation before create/update requests

pub mod form;
pub mod sort;

pub use form::{validate_student, FormPatch, StudentForm};
pub use sort::{filter_students, sort_students, SortDirection, SortField, SortState};
