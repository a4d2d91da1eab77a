use cf_roster::parser::StudentProfile;
use cf_roster::roster::{
    filter_students, sort_students, validate_student, SortDirection, SortField, SortState,
    StudentForm,
};
use cf_roster::utils::error::ValidationError;
use pretty_assertions::assert_eq;

fn student(name: &str, email: &str, handle: &str, rating: Option<i64>, max: Option<i64>) -> StudentProfile {
    StudentProfile {
        name: name.to_string(),
        email: email.to_string(),
        cf_handle: handle.to_string(),
        current_rating: rating,
        max_rating: max,
        ..Default::default()
    }
}

fn roster() -> Vec<StudentProfile> {
    vec![
        student("Mira", "mira@school.edu", "mira_k", Some(1650), Some(1702)),
        student("Arun", "arun@school.edu", "", None, None),
        student("Zoe", "zoe@example.com", "ZoeCodes", Some(1210), Some(1390)),
    ]
}

fn names(students: &[StudentProfile]) -> Vec<&str> {
    students.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn test_sort_by_name_both_directions() {
    let mut students = roster();
    sort_students(&mut students, SortState::default());
    assert_eq!(names(&students), vec!["Arun", "Mira", "Zoe"]);

    sort_students(&mut students, SortState::<SortField>::default().toggle(SortField::Name));
    assert_eq!(names(&students), vec!["Zoe", "Mira", "Arun"]);
}

#[test]
fn test_sort_by_max_rating_desc() {
    let mut students = roster();
    sort_students(
        &mut students,
        SortState::new(SortField::MaxRating, SortDirection::Desc),
    );
    assert_eq!(names(&students), vec!["Mira", "Zoe", "Arun"]);
}

#[test]
fn test_filter_matches_any_field_case_insensitive() {
    let students = roster();

    let by_handle: Vec<&str> = filter_students(&students, "zoecodes")
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(by_handle, vec!["Zoe"]);

    let by_email = filter_students(&students, "SCHOOL.EDU");
    assert_eq!(by_email.len(), 2);

    assert_eq!(filter_students(&students, "  ").len(), 3);
    assert!(filter_students(&students, "nobody").is_empty());
}

#[test]
fn test_validate_valid_form() {
    let form = StudentForm {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        cf_handle: "ana_r".to_string(),
    };
    assert!(validate_student(&form).is_empty());
}

#[test]
fn test_validate_collects_every_error() {
    let form = StudentForm {
        name: "   ".to_string(),
        email: "ana.example.com".to_string(),
        phone: "555-1234".to_string(),
        cf_handle: String::new(),
    };

    assert_eq!(
        validate_student(&form),
        vec![
            ValidationError::NameRequired,
            ValidationError::EmailInvalid,
            ValidationError::PhoneInvalid
        ]
    );
}

#[test]
fn test_validate_missing_email_and_optional_phone() {
    let form = StudentForm {
        name: "Ana".to_string(),
        ..Default::default()
    };
    assert_eq!(validate_student(&form), vec![ValidationError::EmailRequired]);
}

#[test]
fn test_form_serializes_camel_case() {
    let form = StudentForm {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: String::new(),
        cf_handle: "ana_r".to_string(),
    };
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["cfHandle"], "ana_r");
    assert!(json.get("cf_handle").is_none());
}
