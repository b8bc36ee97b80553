//! Job posting entity and its validated draft.
//!
//! A [`JobDraft`] holds the client-editable fields. A [`Job`] adds the
//! server-assigned identifier and creation timestamp. A [`JobRecord`] is the
//! read model leaving the domain: a job plus the expiration state derived at
//! read time.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::expiration::ExpirationPolicy;

/// Stable job identifier.
///
/// # Examples
/// ```
/// use jobboard::domain::JobId;
///
/// let id: JobId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Borrow the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for JobId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Client-editable job fields that must be present and non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    /// Job title.
    Title,
    /// Job description.
    Description,
    /// Job location.
    Location,
}

impl JobField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised when building a [`JobDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobValidationError {
    /// A required text field was empty once trimmed.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Offending field.
        field: JobField,
    },
}

impl JobValidationError {
    /// Field that failed validation.
    #[must_use]
    pub const fn field(&self) -> JobField {
        match self {
            Self::EmptyField { field } => *field,
        }
    }
}

/// Validated client-supplied job fields used for creation and replacement.
///
/// ## Invariants
/// - `title`, `description` and `location` are non-blank.
/// - `salary` is accepted as given, including negative values.
/// - `duties` keeps the caller's order and may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    title: String,
    description: String,
    location: String,
    salary: f64,
    duties: Vec<String>,
    url: String,
}

impl JobDraft {
    /// Validate and build a draft.
    ///
    /// # Errors
    /// Returns [`JobValidationError::EmptyField`] when a required text field
    /// is blank.
    ///
    /// # Examples
    /// ```
    /// use jobboard::domain::JobDraft;
    ///
    /// let draft = JobDraft::try_new(
    ///     "Backend Developer",
    ///     "Build APIs",
    ///     "Remote",
    ///     120_000.0,
    ///     vec!["Write code".to_owned()],
    ///     "",
    /// )
    /// .expect("valid draft");
    /// assert_eq!(draft.title(), "Backend Developer");
    /// ```
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        salary: f64,
        duties: Vec<String>,
        url: impl Into<String>,
    ) -> Result<Self, JobValidationError> {
        let draft = Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            salary,
            duties,
            url: url.into(),
        };
        for (field, value) in [
            (JobField::Title, &draft.title),
            (JobField::Description, &draft.description),
            (JobField::Location, &draft.location),
        ] {
            if value.trim().is_empty() {
                return Err(JobValidationError::EmptyField { field });
            }
        }
        Ok(draft)
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Job description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Job location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Advertised salary.
    #[must_use]
    pub const fn salary(&self) -> f64 {
        self.salary
    }

    /// Ordered list of duties.
    #[must_use]
    pub fn duties(&self) -> &[String] {
        &self.duties
    }

    /// External link, empty when not supplied.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Format a timestamp the way jobs store their creation time.
#[must_use]
pub fn format_created_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A persisted job posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: JobId,
    draft: JobDraft,
    created_at: String,
}

impl Job {
    /// Stamp a new job from a draft with a fresh id and the given clock time.
    #[must_use]
    pub fn create(draft: JobDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: JobId::random(),
            draft,
            created_at: format_created_at(now),
        }
    }

    /// Rebuild a job from stored parts.
    ///
    /// `created_at` is kept verbatim; an unparseable value yields a job that
    /// expires today.
    #[must_use]
    pub const fn from_parts(id: JobId, draft: JobDraft, created_at: String) -> Self {
        Self {
            id,
            draft,
            created_at,
        }
    }

    /// Replace every mutable field, keeping the id and creation time.
    #[must_use]
    pub fn with_draft(self, draft: JobDraft) -> Self {
        Self { draft, ..self }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Editable fields.
    #[must_use]
    pub const fn draft(&self) -> &JobDraft {
        &self.draft
    }

    /// Creation time as an RFC 3339 string.
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Read model returned to callers with expiration derived from "now".
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    job: Job,
    days_to_expiration: i64,
    expired: bool,
}

impl JobRecord {
    /// Derive the expiration state of `job` at `now`.
    #[must_use]
    pub fn at(job: Job, policy: ExpirationPolicy, now: DateTime<Utc>) -> Self {
        let days_to_expiration = policy.days_to_expiration(job.created_at(), now);
        let expired = policy.is_expired(job.created_at(), now);
        Self {
            job,
            days_to_expiration,
            expired,
        }
    }

    /// Underlying job.
    #[must_use]
    pub const fn job(&self) -> &Job {
        &self.job
    }

    /// Whole days left before expiry, truncated toward zero.
    #[must_use]
    pub const fn days_to_expiration(&self) -> i64 {
        self.days_to_expiration
    }

    /// Whether the posting has expired.
    #[must_use]
    pub const fn expired(&self) -> bool {
        self.expired
    }

    /// Discard the derived state.
    #[must_use]
    pub fn into_job(self) -> Job {
        self.job
    }
}

#[cfg(test)]
mod tests {
    //! Validation and lifecycle coverage for job entities.

    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn draft() -> JobDraft {
        JobDraft::try_new(
            "Backend Developer",
            "Build APIs",
            "Remote",
            120_000.0,
            vec!["Write code".to_owned(), "Review PRs".to_owned()],
            "",
        )
        .expect("valid draft")
    }

    #[fixture]
    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case("", "d", "l", JobField::Title)]
    #[case("t", "  ", "l", JobField::Description)]
    #[case("t", "d", "\t", JobField::Location)]
    fn try_new_rejects_blank_fields(
        #[case] title: &str,
        #[case] description: &str,
        #[case] location: &str,
        #[case] field: JobField,
    ) {
        let err = JobDraft::try_new(title, description, location, 1.0, Vec::new(), "")
            .expect_err("blank field is rejected");
        assert_eq!(err.field(), field);
        assert_eq!(err.to_string(), format!("{field} must not be empty"));
    }

    #[rstest]
    fn try_new_accepts_negative_salary_and_empty_duties() {
        let draft = JobDraft::try_new("t", "d", "l", -5.0, Vec::new(), "https://example.test")
            .expect("salary and duties are accepted as given");
        assert!(draft.salary() < 0.0);
        assert!(draft.duties().is_empty());
        assert_eq!(draft.url(), "https://example.test");
    }

    #[rstest]
    fn create_stamps_id_and_canonical_timestamp(draft: JobDraft, created: DateTime<Utc>) {
        let job = Job::create(draft.clone(), created);
        assert_eq!(job.created_at(), "2024-05-01T09:30:00Z");
        assert_eq!(job.draft(), &draft);
        assert_ne!(job.id(), Job::create(draft, created).id());
    }

    #[rstest]
    fn with_draft_keeps_identity(draft: JobDraft, created: DateTime<Utc>) {
        let job = Job::create(draft, created);
        let replacement = JobDraft::try_new("New", "Other", "Berlin", 1.0, Vec::new(), "")
            .expect("valid draft");

        let updated = job.clone().with_draft(replacement.clone());
        assert_eq!(updated.id(), job.id());
        assert_eq!(updated.created_at(), job.created_at());
        assert_eq!(updated.draft(), &replacement);
    }

    #[rstest]
    fn record_is_fresh_at_creation(draft: JobDraft, created: DateTime<Utc>) {
        let record = JobRecord::at(Job::create(draft, created), ExpirationPolicy::default(), created);
        assert_eq!(record.days_to_expiration(), 14);
        assert!(!record.expired());
    }

    #[rstest]
    fn record_is_expired_during_final_day(draft: JobDraft, created: DateTime<Utc>) {
        let job = Job::create(draft, created);
        let now = created + Duration::days(13) + Duration::hours(12);
        let record = JobRecord::at(job, ExpirationPolicy::default(), now);
        assert_eq!(record.days_to_expiration(), 0);
        assert!(record.expired());
    }

    #[rstest]
    fn record_expires_after_window(draft: JobDraft, created: DateTime<Utc>) {
        let job = Job::create(draft, created);
        let record = JobRecord::at(job, ExpirationPolicy::default(), created + Duration::days(20));
        assert_eq!(record.days_to_expiration(), -6);
        assert!(record.expired());
    }
}
