//! In-process job repository.
//!
//! Used when no database is configured and by handler and service tests. Jobs
//! are kept in insertion order, which doubles as the tiebreaker for every
//! listing, matching the `seq` column of the PostgreSQL adapter.

use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::listing::title_matches;
use crate::domain::ports::{JobRepository, JobRepositoryError, JobSlice};
use crate::domain::{Job, JobDraft, JobId, ListingQuery};

/// Job repository backed by a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Job>>, JobRepositoryError> {
        self.jobs
            .lock()
            .map_err(|_| JobRepositoryError::query("job store lock poisoned"))
    }
}

fn to_count(limit: u32) -> usize {
    usize::try_from(limit).unwrap_or(usize::MAX)
}

/// Sort newest-inserted first among equal keys.
fn sorted_desc_by<F>(jobs: &[Job], limit: u32, mut compare: F) -> Vec<Job>
where
    F: FnMut(&Job, &Job) -> Ordering,
{
    let mut indexed: Vec<(usize, &Job)> = jobs.iter().enumerate().collect();
    indexed.sort_by(|(left_seq, left), (right_seq, right)| {
        compare(right, left).then_with(|| right_seq.cmp(left_seq))
    });
    indexed
        .into_iter()
        .take(to_count(limit))
        .map(|(_, job)| job.clone())
        .collect()
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn insert(&self, job: &Job) -> Result<(), JobRepositoryError> {
        let mut jobs = self.lock()?;
        if jobs.iter().any(|existing| existing.id() == job.id()) {
            return Err(JobRepositoryError::query(format!(
                "job {} already exists",
                job.id()
            )));
        }
        jobs.push(job.clone());
        debug!(job_id = %job.id(), "stored job in memory");
        Ok(())
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, JobRepositoryError> {
        let jobs = self.lock()?;
        Ok(jobs.iter().find(|job| job.id() == *id).cloned())
    }

    async fn list(&self, query: &ListingQuery) -> Result<JobSlice, JobRepositoryError> {
        let jobs = self.lock()?;
        let matching: Vec<&Job> = jobs
            .iter()
            .filter(|job| {
                query
                    .title_filter()
                    .is_none_or(|term| title_matches(job.draft().title(), term))
            })
            .collect();
        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(query.page().offset()).unwrap_or(usize::MAX);
        let page = matching
            .into_iter()
            .skip(offset)
            .take(to_count(query.page().limit()))
            .cloned()
            .collect();
        Ok(JobSlice { jobs: page, total })
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Job>, JobRepositoryError> {
        let jobs = self.lock()?;
        Ok(sorted_desc_by(&jobs, limit, |left, right| {
            left.created_at().cmp(right.created_at())
        }))
    }

    async fn list_by_salary_desc(&self, limit: u32) -> Result<Vec<Job>, JobRepositoryError> {
        let jobs = self.lock()?;
        Ok(sorted_desc_by(&jobs, limit, |left, right| {
            left.draft().salary().total_cmp(&right.draft().salary())
        }))
    }

    async fn update(&self, id: &JobId, draft: &JobDraft) -> Result<bool, JobRepositoryError> {
        let mut jobs = self.lock()?;
        let Some(slot) = jobs.iter_mut().find(|job| job.id() == *id) else {
            return Ok(false);
        };
        *slot = slot.clone().with_draft(draft.clone());
        Ok(true)
    }

    async fn delete(&self, id: &JobId) -> Result<bool, JobRepositoryError> {
        let mut jobs = self.lock()?;
        let before = jobs.len();
        jobs.retain(|job| job.id() != *id);
        Ok(jobs.len() != before)
    }
}

#[cfg(test)]
mod tests {
    //! Ordering and pagination coverage for the in-memory adapter.

    use chrono::TimeDelta;
    use pagination::PageRequest;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::test_support::{draft, fixture_now};

    #[fixture]
    fn repo() -> InMemoryJobRepository {
        InMemoryJobRepository::new()
    }

    async fn seed(repo: &InMemoryJobRepository, title: &str, salary: f64, minutes: i64) -> Job {
        let job = Job::create(draft(title, salary), fixture_now() + TimeDelta::minutes(minutes));
        repo.insert(&job).await.expect("insert succeeds");
        job
    }

    fn titles(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|job| job.draft().title()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_duplicate_ids(repo: InMemoryJobRepository) {
        let job = seed(&repo, "Rust Engineer", 1.0, 0).await;
        let err = repo.insert(&job).await.expect_err("duplicate id is rejected");
        assert!(matches!(err, JobRepositoryError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn list_filters_and_pages_in_insertion_order(repo: InMemoryJobRepository) {
        seed(&repo, "Rust Engineer", 1.0, 0).await;
        seed(&repo, "Go Engineer", 1.0, 1).await;
        seed(&repo, "Senior RUST Developer", 1.0, 2).await;
        seed(&repo, "trusty intern", 1.0, 3).await;

        let request = PageRequest::new(2, 2).expect("valid request");
        let slice = repo
            .list(&ListingQuery::new(Some("rust"), request))
            .await
            .expect("list succeeds");

        assert_eq!(slice.total, 3);
        assert_eq!(titles(&slice.jobs), vec!["trusty intern"]);
    }

    #[rstest]
    #[tokio::test]
    async fn list_past_the_end_is_empty(repo: InMemoryJobRepository) {
        seed(&repo, "Rust Engineer", 1.0, 0).await;
        let request = PageRequest::new(5, 10).expect("valid request");
        let slice = repo
            .list(&ListingQuery::new(None, request))
            .await
            .expect("list succeeds");
        assert!(slice.jobs.is_empty());
        assert_eq!(slice.total, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn recent_orders_by_creation_then_insertion(repo: InMemoryJobRepository) {
        seed(&repo, "oldest", 1.0, 0).await;
        seed(&repo, "tied first", 1.0, 5).await;
        seed(&repo, "tied second", 1.0, 5).await;
        seed(&repo, "middle", 1.0, 3).await;

        let recent = repo.list_recent(3).await.expect("recent succeeds");
        assert_eq!(titles(&recent), vec!["tied second", "tied first", "middle"]);
    }

    #[rstest]
    #[tokio::test]
    async fn salary_orders_descending(repo: InMemoryJobRepository) {
        seed(&repo, "low", 100_000.0, 0).await;
        seed(&repo, "high", 120_000.0, 1).await;
        seed(&repo, "negative", -1.0, 2).await;

        let top = repo.list_by_salary_desc(10).await.expect("top salary succeeds");
        assert_eq!(titles(&top), vec!["high", "low", "negative"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_matches(repo: InMemoryJobRepository) {
        let job = seed(&repo, "Rust Engineer", 1.0, 0).await;
        let replacement = draft("Staff Engineer", 2.0);

        assert!(repo.update(&job.id(), &replacement).await.expect("update succeeds"));
        assert!(!repo.update(&JobId::random(), &replacement).await.expect("update succeeds"));

        let stored = repo
            .find_by_id(&job.id())
            .await
            .expect("lookup succeeds")
            .expect("job exists");
        assert_eq!(stored.draft(), &replacement);
        assert_eq!(stored.created_at(), job.created_at());

        assert!(repo.delete(&job.id()).await.expect("delete succeeds"));
        assert!(!repo.delete(&job.id()).await.expect("delete succeeds"));
    }
}
