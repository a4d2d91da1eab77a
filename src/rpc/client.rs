//! HTTP client for the student API.

use super::types::{ApiMessage, Method, RawBundle};
use crate::parser::bundle::parse_profile;
use crate::parser::schema::StudentProfile;
use crate::roster::form::StudentForm;
use crate::utils::config::DEFAULT_API_TIMEOUT;
use crate::utils::error::ApiError;
use log::{debug, info, warn};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

/// Client for the student API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(DEFAULT_API_TIMEOUT)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every student on the roster
    pub fn list_students(&self) -> Result<Vec<StudentProfile>, ApiError> {
        let body = self.send(Method::Get, "/students", None, "students")?;
        let students = parse_student_list(&body)?;

        info!("Fetched {} students", students.len());
        Ok(students)
    }

    /// Fetch a single student record
    pub fn get_student(&self, id: &str) -> Result<StudentProfile, ApiError> {
        let id = normalize_student_id(id)?;
        let body = self.send(Method::Get, &format!("/students/{}", id), None, &id)?;
        expect_student(&body)
    }

    /// Create a student, returning the stored record
    pub fn create_student(&self, form: &StudentForm) -> Result<StudentProfile, ApiError> {
        info!("Creating student: {}", form.name);
        let payload = serde_json::to_value(form)?;
        let body = self.send(Method::Post, "/students", Some(&payload), &form.name)?;
        expect_student(&body)
    }

    /// Replace a student's editable fields, returning the stored record
    pub fn update_student(&self, id: &str, form: &StudentForm) -> Result<StudentProfile, ApiError> {
        let id = normalize_student_id(id)?;
        info!("Updating student: {}", id);
        let payload = serde_json::to_value(form)?;
        let body = self.send(Method::Put, &format!("/students/{}", id), Some(&payload), &id)?;
        expect_student(&body)
    }

    /// Delete a student
    pub fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        let id = normalize_student_id(id)?;
        info!("Deleting student: {}", id);
        self.send(Method::Delete, &format!("/students/{}", id), None, &id)?;
        Ok(())
    }

    /// Fetch the aggregated profile bundle of a student
    ///
    /// The result is left raw; see [`crate::parser::parse_bundle`].
    pub fn get_profile_bundle(&self, id: &str) -> Result<RawBundle, ApiError> {
        let id = normalize_student_id(id)?;
        info!("Fetching profile bundle for student: {}", id);
        self.send(Method::Get, &format!("/students/{}/pro", id), None, &id)
    }

    /// Ask the API to re-sync every student with Codeforces
    pub fn trigger_sync(&self) -> Result<Value, ApiError> {
        info!("Triggering Codeforces sync");
        self.send(Method::Post, "/sync", None, "sync")
    }

    /// Issue a request and decode the JSON body
    ///
    /// **Private** - shared by every operation. `subject` names the thing
    /// being requested so a 404 can say what was missing.
    fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
        subject: &str,
    ) -> Result<Value, ApiError> {
        let url = build_url(&self.base_url, path);
        debug!("{} {}", method, url);

        let request: RequestBuilder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        let request = match payload {
            Some(body) => request.json(body),
            None => request,
        };

        let response = request.send().map_err(ApiError::RequestFailed)?;
        let status = response.status();
        let text = response.text().map_err(ApiError::RequestFailed)?;

        if !status.is_success() {
            return Err(map_http_error(status.as_u16(), &text, subject));
        }

        decode_body(&text)
    }
}

/// Join the base URL and an endpoint path with exactly one slash
pub fn build_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Trim an id and make sure it is usable as a single path segment
pub fn normalize_student_id(id: &str) -> Result<String, ApiError> {
    let id = id.trim();
    if id.is_empty() || id.contains('/') || id.contains(char::is_whitespace) {
        return Err(ApiError::InvalidId(id.to_string()));
    }
    Ok(id.to_string())
}

/// Map a non-success HTTP status to our error type
pub fn map_http_error(status: u16, body: &str, subject: &str) -> ApiError {
    match status {
        404 => ApiError::StudentNotFound(subject.to_string()),
        500..=599 => ApiError::ServerError {
            status,
            message: ApiMessage::from_body(body),
        },
        _ => ApiError::InvalidResponse(format!("HTTP {}: {}", status, ApiMessage::from_body(body))),
    }
}

/// Decode the roster listing; entries that are not objects are skipped
pub fn parse_student_list(body: &Value) -> Result<Vec<StudentProfile>, ApiError> {
    let items = body.as_array().ok_or_else(|| {
        ApiError::InvalidResponse("Expected a JSON array of students".to_string())
    })?;

    Ok(items
        .iter()
        .filter_map(|item| match item.as_object() {
            Some(obj) => Some(parse_profile(obj)),
            None => {
                warn!("Skipping malformed student entry: {}", item);
                None
            }
        })
        .collect())
}

/// Empty bodies (e.g. after DELETE) decode to `null`
fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
        .map_err(|e| ApiError::InvalidResponse(format!("Response is not JSON: {}", e)))
}

fn expect_student(body: &Value) -> Result<StudentProfile, ApiError> {
    body.as_object()
        .map(parse_profile)
        .ok_or_else(|| ApiError::InvalidResponse("Expected a student object".to_string()))
}
