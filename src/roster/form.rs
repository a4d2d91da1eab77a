//! Create/edit form for a student record.

use crate::parser::schema::StudentProfile;
use crate::utils::config::MIN_PHONE_DIGITS;
use crate::utils::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Fields a user can set when creating or editing a student
///
/// Serialized as the request body of the create/update endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub cf_handle: String,
}

impl StudentForm {
    /// Prefill from an existing record
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            cf_handle: profile.cf_handle.clone(),
        }
    }

    /// Overwrite only the fields that were provided
    pub fn apply(&mut self, patch: FormPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(cf_handle) = patch.cf_handle {
            self.cf_handle = cf_handle;
        }
    }
}

/// Partial update for [`StudentForm`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cf_handle: Option<String>,
}

impl FormPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.cf_handle.is_none()
    }
}

/// Validate a form, reporting every problem found
///
/// **Public** - an empty result means the form can be submitted
pub fn validate_student(form: &StudentForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    if form.email.trim().is_empty() {
        errors.push(ValidationError::EmailRequired);
    } else if !looks_like_email(&form.email) {
        errors.push(ValidationError::EmailInvalid);
    }

    if !form.phone.is_empty() {
        let digits = form.phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < MIN_PHONE_DIGITS {
            errors.push(ValidationError::PhoneInvalid);
        }
    }

    errors
}

/// Some whitespace-free token has the shape `x@y.z`
fn looks_like_email(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}
