//! PostgreSQL-backed `JobRepository` implementation using Diesel ORM.
//!
//! Duties are stored as a JSON array in a text column and decoded on every
//! read. Listings break ties on the `seq` column so page boundaries are
//! stable between calls.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{JobRepository, JobRepositoryError, JobSlice};
use crate::domain::{Job, JobDraft, JobId, ListingQuery};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{JobRow, JobUpdate, NewJobRow};
use super::pool::{DbPool, PoolError};
use super::schema::jobs;

/// Diesel-backed implementation of the job repository port.
#[derive(Clone)]
pub struct DieselJobRepository {
    pool: DbPool,
}

impl DieselJobRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> JobRepositoryError {
    map_basic_pool_error(error, JobRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> JobRepositoryError {
    map_basic_diesel_error(
        error,
        JobRepositoryError::query,
        JobRepositoryError::connection,
    )
}

fn encode_duties(draft: &JobDraft) -> Result<String, JobRepositoryError> {
    serde_json::to_string(draft.duties())
        .map_err(|err| JobRepositoryError::query(format!("serialise duties: {err}")))
}

fn decode_duties(raw: &str) -> Result<Vec<String>, JobRepositoryError> {
    serde_json::from_str(raw)
        .map_err(|err| JobRepositoryError::query(format!("decode duties: {err}")))
}

/// Convert a database row into a validated domain job.
fn row_to_job(row: JobRow) -> Result<Job, JobRepositoryError> {
    let JobRow {
        id,
        title,
        description,
        location,
        salary,
        duties,
        url,
        created_at,
    } = row;

    let duties = decode_duties(&duties)?;
    let draft = JobDraft::try_new(title, description, location, salary, duties, url)
        .map_err(|err| JobRepositoryError::query(format!("stored job {id} is invalid: {err}")))?;
    Ok(Job::from_parts(JobId::from_uuid(id), draft, created_at))
}

fn rows_to_jobs(rows: Vec<JobRow>) -> Result<Vec<Job>, JobRepositoryError> {
    rows.into_iter().map(row_to_job).collect()
}

/// Escape `LIKE` wildcards so the filter matches a literal substring.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn filtered_jobs(title_filter: Option<&str>) -> jobs::BoxedQuery<'static, Pg> {
    let query = jobs::table.into_boxed();
    match title_filter {
        Some(term) => query.filter(jobs::title.ilike(contains_pattern(term))),
        None => query,
    }
}

fn to_sql_count(value: u64, what: &str) -> Result<i64, JobRepositoryError> {
    i64::try_from(value).map_err(|_| JobRepositoryError::query(format!("{what} out of range")))
}

#[async_trait]
impl JobRepository for DieselJobRepository {
    async fn insert(&self, job: &Job) -> Result<(), JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let draft = job.draft();
        let duties = encode_duties(draft)?;

        let new_row = NewJobRow {
            id: *job.id().as_uuid(),
            title: draft.title(),
            description: draft.description(),
            location: draft.location(),
            salary: draft.salary(),
            duties: &duties,
            url: draft.url(),
            created_at: job.created_at(),
        };

        diesel::insert_into(jobs::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(job_id = %job.id(), "inserted job row");
        Ok(())
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = jobs::table
            .filter(jobs::id.eq(id.as_uuid()))
            .select(JobRow::as_select())
            .first::<JobRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_job).transpose()
    }

    async fn list(&self, query: &ListingQuery) -> Result<JobSlice, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let page = query.page();
        let limit = i64::from(page.limit());
        let offset = to_sql_count(page.offset(), "offset")?;

        let total: i64 = filtered_jobs(query.title_filter())
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<JobRow> = filtered_jobs(query.title_filter())
            .order(jobs::seq.asc())
            .limit(limit)
            .offset(offset)
            .select(JobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(total, returned = rows.len(), "listed job rows");
        Ok(JobSlice {
            jobs: rows_to_jobs(rows)?,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JobRow> = jobs::table
            .order((jobs::created_at.desc(), jobs::seq.desc()))
            .limit(i64::from(limit))
            .select(JobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_jobs(rows)
    }

    async fn list_by_salary_desc(&self, limit: u32) -> Result<Vec<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JobRow> = jobs::table
            .order((jobs::salary.desc(), jobs::seq.desc()))
            .limit(i64::from(limit))
            .select(JobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_jobs(rows)
    }

    async fn update(&self, id: &JobId, draft: &JobDraft) -> Result<bool, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let duties = encode_duties(draft)?;

        let changes = JobUpdate {
            title: draft.title(),
            description: draft.description(),
            location: draft.location(),
            salary: draft.salary(),
            duties: &duties,
            url: draft.url(),
        };

        let affected = diesel::update(jobs::table.filter(jobs::id.eq(id.as_uuid())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }

    async fn delete(&self, id: &JobId) -> Result<bool, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(jobs::table.filter(jobs::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }
}
