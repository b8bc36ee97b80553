//! Shared validation helpers for the HTTP adapter.
//!
//! Every validation failure carries `details` naming the offending field and
//! a stable code so clients can highlight the right input.

use serde_json::json;

use crate::domain::{Error, JobId, JobValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    EmptyField,
    InvalidUuid,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::EmptyField => "empty_field",
            Self::InvalidUuid => "invalid_uuid",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn job_validation_error(error: &JobValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field().as_str(),
        "code": ValidationCode::EmptyField.as_str(),
    }))
}

/// Parse a job id path segment. Anything that is not a UUID names no job.
pub(crate) fn parse_job_id(value: &str) -> Result<JobId, Error> {
    value.parse().map_err(|_| {
        Error::not_found(format!("job {value} not found")).with_details(json!({
            "field": "id",
            "value": value,
            "code": ValidationCode::InvalidUuid.as_str(),
        }))
    })
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}
