//! Job catalogue domain services.
//!
//! [`JobCommandService`] implements the mutation port and
//! [`JobQueryService`] the read port. Both stamp or derive time through an
//! injected [`Clock`] so expiration can be tested with a frozen clock.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::Page;
use tracing::info;

use crate::domain::ports::{JobCommand, JobQuery, JobRepository, JobRepositoryError};
use crate::domain::{Error, ExpirationPolicy, Job, JobDraft, JobId, JobRecord, ListingQuery};

fn map_repository_error(error: JobRepositoryError) -> Error {
    match error {
        JobRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("job repository unavailable: {message}"))
        }
        JobRepositoryError::Query { message } => {
            Error::internal(format!("job repository error: {message}"))
        }
    }
}

fn job_not_found(id: JobId) -> Error {
    Error::not_found(format!("job {id} not found"))
}

/// Job service implementing the command driving port.
#[derive(Clone)]
pub struct JobCommandService<R> {
    job_repo: Arc<R>,
    clock: Arc<dyn Clock>,
    policy: ExpirationPolicy,
}

impl<R> JobCommandService<R> {
    /// Create a command service over the job repository.
    pub fn new(job_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            job_repo,
            clock,
            policy: ExpirationPolicy::default(),
        }
    }
}

#[async_trait]
impl<R> JobCommand for JobCommandService<R>
where
    R: JobRepository,
{
    async fn create_job(&self, draft: JobDraft) -> Result<JobRecord, Error> {
        let now = self.clock.utc();
        let job = Job::create(draft, now);

        self.job_repo
            .insert(&job)
            .await
            .map_err(map_repository_error)?;

        info!(job_id = %job.id(), "job created");
        Ok(JobRecord::at(job, self.policy, now))
    }

    async fn update_job(&self, id: JobId, draft: JobDraft) -> Result<(), Error> {
        let updated = self
            .job_repo
            .update(&id, &draft)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(job_not_found(id));
        }
        info!(job_id = %id, "job updated");
        Ok(())
    }

    async fn delete_job(&self, id: JobId) -> Result<(), Error> {
        let deleted = self
            .job_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(job_not_found(id));
        }
        info!(job_id = %id, "job deleted");
        Ok(())
    }
}

/// Job service implementing the query driving port.
#[derive(Clone)]
pub struct JobQueryService<R> {
    job_repo: Arc<R>,
    clock: Arc<dyn Clock>,
    policy: ExpirationPolicy,
}

impl<R> JobQueryService<R> {
    /// Create a query service over the job repository.
    pub fn new(job_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            job_repo,
            clock,
            policy: ExpirationPolicy::default(),
        }
    }

    fn records(&self, jobs: Vec<Job>) -> Vec<JobRecord> {
        let now = self.clock.utc();
        jobs.into_iter()
            .map(|job| JobRecord::at(job, self.policy, now))
            .collect()
    }
}

#[async_trait]
impl<R> JobQuery for JobQueryService<R>
where
    R: JobRepository,
{
    async fn get_job(&self, id: JobId) -> Result<JobRecord, Error> {
        let job = self
            .job_repo
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| job_not_found(id))?;

        Ok(JobRecord::at(job, self.policy, self.clock.utc()))
    }

    async fn list_jobs(&self, query: ListingQuery) -> Result<Page<JobRecord>, Error> {
        let slice = self
            .job_repo
            .list(&query)
            .await
            .map_err(map_repository_error)?;

        Ok(Page::new(self.records(slice.jobs), query.page(), slice.total))
    }

    async fn list_recent_jobs(&self, limit: u32) -> Result<Vec<JobRecord>, Error> {
        let jobs = self
            .job_repo
            .list_recent(limit)
            .await
            .map_err(map_repository_error)?;
        Ok(self.records(jobs))
    }

    async fn list_top_salary_jobs(&self, limit: u32) -> Result<Vec<JobRecord>, Error> {
        let jobs = self
            .job_repo
            .list_by_salary_desc(limit)
            .await
            .map_err(map_repository_error)?;
        Ok(self.records(jobs))
    }
}

#[cfg(test)]
#[path = "job_catalogue_service_tests.rs"]
mod tests;
