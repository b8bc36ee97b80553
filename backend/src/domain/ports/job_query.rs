//! Driving port for job reads.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Error, JobId, JobRecord, ListingQuery};

/// Driving port for reading jobs with their expiration state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobQuery: Send + Sync {
    /// Fetch one job.
    async fn get_job(&self, id: JobId) -> Result<JobRecord, Error>;

    /// Filtered, paginated listing.
    async fn list_jobs(&self, query: ListingQuery) -> Result<Page<JobRecord>, Error>;

    /// Most recently created jobs.
    async fn list_recent_jobs(&self, limit: u32) -> Result<Vec<JobRecord>, Error>;

    /// Highest paid jobs.
    async fn list_top_salary_jobs(&self, limit: u32) -> Result<Vec<JobRecord>, Error>;
}
