//! Driving port for job mutations.

use async_trait::async_trait;

use crate::domain::{Error, JobDraft, JobId, JobRecord};

/// Driving port for creating, replacing and deleting jobs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobCommand: Send + Sync {
    /// Create a job with a fresh id and creation time.
    async fn create_job(&self, draft: JobDraft) -> Result<JobRecord, Error>;

    /// Replace every mutable field of an existing job.
    async fn update_job(&self, id: JobId, draft: JobDraft) -> Result<(), Error>;

    /// Delete a job permanently.
    async fn delete_job(&self, id: JobId) -> Result<(), Error>;
}
