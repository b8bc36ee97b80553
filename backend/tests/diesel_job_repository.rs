//! Integration tests for `DieselJobRepository` against embedded PostgreSQL.
//!
//! Tests build their own Tokio runtime because cluster bootstrap must not run
//! inside one.

use jobboard::domain::ports::{JobRepository, JobRepositoryError};
use jobboard::domain::{Job, JobDraft, JobId, ListingQuery};
use jobboard::outbound::persistence::{DbPool, DieselJobRepository, PoolConfig};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use pagination::PageRequest;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{handle_cluster_setup_failure, provision_database};

struct Harness {
    runtime: Runtime,
    repository: DieselJobRepository,
    _database: TemporaryDatabase,
}

impl Harness {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn insert(&self, job: &Job) {
        self.block_on(self.repository.insert(job)).expect("insert job");
    }
}

fn setup() -> Result<Harness, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_database()?;
    let config = PoolConfig::new(database.url())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;
    Ok(Harness {
        runtime,
        repository: DieselJobRepository::new(pool),
        _database: database,
    })
}

#[fixture]
fn harness() -> Option<Harness> {
    match setup() {
        Ok(harness) => Some(harness),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0)
        .single()
        .expect("valid fixture time")
}

fn job(title: &str, salary: f64, minutes: i64) -> Job {
    let draft = JobDraft::try_new(
        title,
        "Build and run APIs",
        "Remote",
        salary,
        vec!["Write code".to_owned(), "Review PRs".to_owned()],
        "",
    )
    .expect("valid draft");
    Job::create(draft, base_time() + TimeDelta::minutes(minutes))
}

fn titles(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|job| job.draft().title()).collect()
}

fn page(number: u32, limit: u32) -> PageRequest {
    PageRequest::new(number, limit).expect("valid page request")
}

#[rstest]
fn insert_then_find_round_trips(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let stored = job("Backend Developer", 120_000.0, 0);
    harness.insert(&stored);

    let found = harness
        .block_on(harness.repository.find_by_id(&stored.id()))
        .expect("lookup succeeds");
    assert_eq!(found, Some(stored));
}

#[rstest]
fn missing_job_is_none(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let found = harness
        .block_on(harness.repository.find_by_id(&JobId::random()))
        .expect("lookup succeeds");
    assert!(found.is_none());
}

#[rstest]
fn duplicate_insert_is_a_query_error(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let stored = job("Backend Developer", 1.0, 0);
    harness.insert(&stored);

    let err = harness
        .block_on(harness.repository.insert(&stored))
        .expect_err("duplicate id rejected");
    assert!(matches!(err, JobRepositoryError::Query { .. }));
}

#[rstest]
fn list_pages_in_insertion_order(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    for (index, title) in ["First", "Second", "Third"].into_iter().enumerate() {
        let minutes = 10 - i64::try_from(index).expect("small index");
        harness.insert(&job(title, 1.0, minutes));
    }

    let slice = harness
        .block_on(harness.repository.list(&ListingQuery::new(None, page(2, 2))))
        .expect("list succeeds");
    assert_eq!(slice.total, 3);
    assert_eq!(titles(&slice.jobs), vec!["Third"]);

    let slice = harness
        .block_on(harness.repository.list(&ListingQuery::new(None, page(3, 2))))
        .expect("list succeeds");
    assert_eq!(slice.total, 3);
    assert!(slice.jobs.is_empty());
}

#[rstest]
#[case("backend", vec!["Backend Developer", "Senior BACKEND lead"])]
#[case("100%", vec!["100% remote"])]
#[case("_", vec![])]
fn list_filters_titles_literally(
    harness: Option<Harness>,
    #[case] filter: &str,
    #[case] expected: Vec<&str>,
) {
    let Some(harness) = harness else { return };
    for title in ["Backend Developer", "Frontend Developer", "Senior BACKEND lead", "100% remote"] {
        harness.insert(&job(title, 1.0, 0));
    }

    let slice = harness
        .block_on(harness.repository.list(&ListingQuery::new(Some(filter), page(1, 10))))
        .expect("list succeeds");
    assert_eq!(titles(&slice.jobs), expected);
    assert_eq!(slice.total, u64::try_from(expected.len()).expect("small count"));
}

#[rstest]
fn ranked_listings_break_ties_by_insertion(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    harness.insert(&job("Junior", 100_000.0, 0));
    harness.insert(&job("Senior", 120_000.0, 5));
    harness.insert(&job("Staff", 120_000.0, 5));
    harness.insert(&job("Intern", 20_000.0, 1));

    let top = harness
        .block_on(harness.repository.list_by_salary_desc(3))
        .expect("top salary succeeds");
    assert_eq!(titles(&top), vec!["Staff", "Senior", "Junior"]);

    let recent = harness
        .block_on(harness.repository.list_recent(10))
        .expect("recent succeeds");
    assert_eq!(titles(&recent), vec!["Staff", "Senior", "Intern", "Junior"]);
}

#[rstest]
fn update_replaces_content_only(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let stored = job("Backend Developer", 1.0, 0);
    harness.insert(&stored);
    let replacement = JobDraft::try_new(
        "Platform Engineer",
        "Own the platform",
        "Berlin",
        2.0,
        Vec::new(),
        "https://jobs.example.test/platform",
    )
    .expect("valid draft");

    let updated = harness
        .block_on(harness.repository.update(&stored.id(), &replacement))
        .expect("update succeeds");
    assert!(updated);

    let found = harness
        .block_on(harness.repository.find_by_id(&stored.id()))
        .expect("lookup succeeds")
        .expect("job still stored");
    assert_eq!(found, stored.with_draft(replacement));

    let missing = harness
        .block_on(harness.repository.update(&JobId::random(), found.draft()))
        .expect("update succeeds");
    assert!(!missing);
}

#[rstest]
fn delete_reports_whether_a_row_was_removed(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let stored = job("Backend Developer", 1.0, 0);
    harness.insert(&stored);

    let first = harness
        .block_on(harness.repository.delete(&stored.id()))
        .expect("delete succeeds");
    let second = harness
        .block_on(harness.repository.delete(&stored.id()))
        .expect("delete succeeds");
    assert!(first);
    assert!(!second);
}
