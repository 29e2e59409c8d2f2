use serde::Serialize;
use thiserror::Error;
use url::Url;

const TITLE_MIN_LENGTH: usize = 3;

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Every field of a link payload that failed validation, in field order.
///
/// Never empty: a passing payload yields `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_fields(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_fields(self) -> Vec<FieldError> {
        self.0
    }

    /// Returns `true` if the given field is among the failures.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks a link's title and url.
///
/// The title must be at least three characters long and the url must parse
/// as an absolute URL with a host. All failing fields are reported.
pub fn validate(title: &str, url: &str) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = [validate_title(title), validate_url(url)]
        .into_iter()
        .flatten()
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn validate_title(title: &str) -> Option<FieldError> {
    if title.is_empty() {
        return Some(FieldError::new("title", "is required"));
    }

    if title.chars().count() < TITLE_MIN_LENGTH {
        return Some(FieldError::new(
            "title",
            format!("must be at least {TITLE_MIN_LENGTH} characters long"),
        ));
    }

    None
}

fn validate_url(url: &str) -> Option<FieldError> {
    if url.is_empty() {
        return Some(FieldError::new("url", "is required"));
    }

    match Url::parse(url) {
        Ok(parsed) if parsed.host_str().is_some_and(|host| !host.is_empty()) => None,
        Ok(_) => Some(FieldError::new(
            "url",
            "must be a valid URL with a scheme and host",
        )),
        Err(e) => Some(FieldError::new("url", format!("must be a valid URL: {e}"))),
    }
}
