//! Sorting and search for the student list view.

use crate::parser::schema::StudentProfile;
use log::debug;
use std::cmp::Ordering;

/// Column the roster table is sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortField {
    #[default]
    Name,
    Email,
    #[value(name = "handle")]
    CfHandle,
    #[value(name = "rating")]
    CurrentRating,
    #[value(name = "max-rating")]
    MaxRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Orient an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Arrow shown next to the sorted column header
    pub fn indicator(self) -> char {
        match self {
            SortDirection::Asc => '↑',
            SortDirection::Desc => '↓',
        }
    }
}

/// Current sort column and direction of a table
///
/// Shared by the roster (`SortField`) and the contest table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F = SortField> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Default> Default for SortState<F> {
    fn default() -> Self {
        Self {
            field: F::default(),
            direction: SortDirection::Asc,
        }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Select a column: the current one flips direction, a new one starts ascending
    pub fn toggle(self, field: F) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

/// Sort students in place (stable)
///
/// Rating columns compare numerically with a missing rating as 0; text
/// columns compare as plain strings with a missing value as empty.
pub fn sort_students(students: &mut [StudentProfile], state: SortState) {
    debug!("Sorting {} students by {:?} {:?}", students.len(), state.field, state.direction);

    students.sort_by(|a, b| state.direction.apply(compare_by(a, b, state.field)));
}

fn compare_by(a: &StudentProfile, b: &StudentProfile, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Email => a.email.cmp(&b.email),
        SortField::CfHandle => a.cf_handle.cmp(&b.cf_handle),
        SortField::CurrentRating => a
            .current_rating
            .unwrap_or(0)
            .cmp(&b.current_rating.unwrap_or(0)),
        SortField::MaxRating => a.max_rating.unwrap_or(0).cmp(&b.max_rating.unwrap_or(0)),
    }
}

/// Students whose name, email or handle contains the query (case-insensitive)
///
/// An empty or blank query keeps every student.
pub fn filter_students<'a>(students: &'a [StudentProfile], query: &str) -> Vec<&'a StudentProfile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return students.iter().collect();
    }

    students
        .iter()
        .filter(|s| {
            [&s.name, &s.email, &s.cf_handle]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
