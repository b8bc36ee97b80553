//! Driven port for job persistence.
//!
//! Adapters store jobs and answer the listing queries. Absence is reported
//! through `Option` and affected-row booleans; the domain service decides how
//! to surface it.

use async_trait::async_trait;

use crate::domain::{Job, JobDraft, JobId, ListingQuery};

use super::define_port_error;

define_port_error! {
    /// Errors raised by job repository adapters.
    pub enum JobRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "job repository connection failed: {message}",
        /// A statement failed or a stored row could not be decoded.
        Query { message: String } =>
            "job repository query failed: {message}",
    }
}

/// One page of jobs plus the number of jobs matching the filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobSlice {
    /// Jobs on the requested page.
    pub jobs: Vec<Job>,
    /// Matching jobs ignoring pagination.
    pub total: u64,
}

/// Port for storing and querying job postings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persist a newly created job.
    async fn insert(&self, job: &Job) -> Result<(), JobRepositoryError>;

    /// Look up a job by id.
    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, JobRepositoryError>;

    /// Filter by title and return the requested page in insertion order.
    async fn list(&self, query: &ListingQuery) -> Result<JobSlice, JobRepositoryError>;

    /// Newest jobs first.
    async fn list_recent(&self, limit: u32) -> Result<Vec<Job>, JobRepositoryError>;

    /// Best paid jobs first.
    async fn list_by_salary_desc(&self, limit: u32) -> Result<Vec<Job>, JobRepositoryError>;

    /// Replace the mutable fields of a job. Returns `false` when no job matched.
    async fn update(&self, id: &JobId, draft: &JobDraft) -> Result<bool, JobRepositoryError>;

    /// Remove a job. Returns `false` when no job matched.
    async fn delete(&self, id: &JobId) -> Result<bool, JobRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the port error constructors.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(JobRepositoryError::connection("pool exhausted"), "job repository connection failed: pool exhausted")]
    #[case(JobRepositoryError::query("bad duties"), "job repository query failed: bad duties")]
    fn error_messages_include_context(#[case] err: JobRepositoryError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
