//! Job catalogue HTTP handlers.
//!
//! ```text
//! POST   /jobs
//! GET    /jobs?query=&page=&limit=
//! GET    /jobs/recent?limit=
//! GET    /jobs/top-salary?limit=
//! GET    /jobs/{id}
//! PUT    /jobs/{id}
//! DELETE /jobs/{id}
//! GET    /jobs/{id}/share
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;
use utoipa::{IntoParams, ToSchema};

use crate::domain::listing::parse_limit;
use crate::domain::{Error, JobDraft, JobId, JobRecord, ListingQuery};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, job_validation_error, parse_job_id, require,
};

/// Message returned when a request body cannot be decoded.
pub const UNPARSEABLE_BODY_MESSAGE: &str = "could not parse job data";

/// JSON extractor configuration turning decode failures into domain errors.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let reason = err.to_string();
        Error::invalid_request(UNPARSEABLE_BODY_MESSAGE)
            .with_details(json!({ "reason": reason }))
            .into()
    })
}

/// Request payload for creating or replacing a job.
///
/// `id`, `created_at` and `expired` are assigned by the server; values sent
/// by clients are ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct JobRequestBody {
    /// Job title.
    #[schema(example = "Backend Developer")]
    pub title: Option<String>,
    /// Job description.
    pub description: Option<String>,
    /// Job location.
    #[schema(example = "Remote")]
    pub location: Option<String>,
    /// Advertised salary.
    #[schema(example = 120000.0)]
    pub salary: Option<f64>,
    /// Ordered duties; may be empty.
    pub duties: Option<Vec<String>>,
    /// External link.
    pub url: Option<String>,
}

impl JobRequestBody {
    fn into_draft(self) -> Result<JobDraft, Error> {
        let title = require(self.title, FieldName::new("title"))?;
        let description = require(self.description, FieldName::new("description"))?;
        let location = require(self.location, FieldName::new("location"))?;
        let salary = require(self.salary, FieldName::new("salary"))?;
        let duties = require(self.duties, FieldName::new("duties"))?;

        JobDraft::try_new(
            title,
            description,
            location,
            salary,
            duties,
            self.url.unwrap_or_default(),
        )
        .map_err(|err| job_validation_error(&err))
    }
}

/// Job as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[cfg_attr(test, derive(PartialEq, Deserialize))]
pub struct JobResponseBody {
    /// Server-assigned identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Job location.
    pub location: String,
    /// Advertised salary.
    pub salary: f64,
    /// Ordered duties.
    pub duties: Vec<String>,
    /// External link, empty when not supplied.
    pub url: String,
    /// Creation time.
    #[schema(format = "date-time")]
    pub created_at: String,
    /// Whether the posting has expired at the time of the request.
    pub expired: bool,
}

impl From<&JobRecord> for JobResponseBody {
    fn from(record: &JobRecord) -> Self {
        let job = record.job();
        let draft = job.draft();
        Self {
            id: job.id().to_string(),
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            location: draft.location().to_owned(),
            salary: draft.salary(),
            duties: draft.duties().to_vec(),
            url: draft.url().to_owned(),
            created_at: job.created_at().to_owned(),
            expired: record.expired(),
        }
    }
}

fn job_bodies(records: &[JobRecord]) -> Vec<JobResponseBody> {
    records.iter().map(JobResponseBody::from).collect()
}

/// Response payload for job creation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
pub struct CreateJobResponseBody {
    /// Always `job created`.
    pub message: String,
    /// The stored job.
    pub job: JobResponseBody,
}

/// Plain acknowledgement payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
pub struct MessageResponseBody {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponseBody {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Pagination metadata payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
pub struct PageMetadataBody {
    /// Page that was returned.
    pub current_page: u32,
    /// Page size that was applied.
    pub per_page: u32,
    /// Jobs matching the filter.
    pub total: u64,
    /// `ceil(total / per_page)`.
    pub total_pages: u64,
}

/// One page of jobs.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
pub struct JobPageBody {
    /// Jobs on the page.
    pub data: Vec<JobResponseBody>,
    /// Position of the page in the full listing.
    pub metadata: PageMetadataBody,
}

impl From<Page<JobRecord>> for JobPageBody {
    fn from(page: Page<JobRecord>) -> Self {
        let (records, metadata) = page.into_parts();
        Self {
            data: job_bodies(&records),
            metadata: PageMetadataBody {
                current_page: metadata.current_page(),
                per_page: metadata.per_page(),
                total: metadata.total(),
                total_pages: metadata.total_pages(),
            },
        }
    }
}

/// Listing parameters. Numbers are taken as text so malformed values fall
/// back to defaults instead of failing the request.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListJobsParams {
    /// Case-insensitive title substring.
    pub query: Option<String>,
    /// Alias for `query`.
    pub title: Option<String>,
    /// One-based page number; invalid values select page 1.
    pub page: Option<String>,
    /// Page size; defaults to 10, invalid values select 6.
    pub limit: Option<String>,
}

impl ListJobsParams {
    fn to_listing_query(&self) -> ListingQuery {
        let filter = self.query.as_deref().or(self.title.as_deref());
        ListingQuery::from_raw(filter, self.page.as_deref(), self.limit.as_deref())
    }
}

/// Size parameter for ranked listings.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    /// Number of jobs; defaults to 10, invalid values select 6.
    pub limit: Option<String>,
}

/// Build the public link to a job details page.
///
/// # Errors
/// Returns an internal error when `host` is blank or the result is not a
/// valid URL.
pub(crate) fn build_share_link(
    scheme: &str,
    host: &str,
    details_path: &str,
    id: JobId,
) -> Result<String, Error> {
    if host.trim().is_empty() {
        return Err(Error::internal("could not determine request host"));
    }
    let mut link = Url::parse(&format!("{scheme}://{host}"))
        .map_err(|err| Error::internal(format!("invalid share link base: {err}")))?;
    link.set_path(&format!("{}/{id}", details_path.trim_end_matches('/')));
    Ok(link.to_string())
}

/// Create a job posting.
#[utoipa::path(
    post,
    path = "/jobs",
    request_body = JobRequestBody,
    responses(
        (status = 201, description = "Job created", body = CreateJobResponseBody),
        (status = 400, description = "Invalid job data", body = ErrorSchema),
        (status = 503, description = "Job store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "createJob"
)]
#[post("/jobs")]
pub async fn create_job(
    state: web::Data<HttpState>,
    payload: web::Json<JobRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let record = state.jobs.create_job(draft).await?;

    Ok(HttpResponse::Created().json(CreateJobResponseBody {
        message: "job created".to_owned(),
        job: JobResponseBody::from(&record),
    }))
}

/// List jobs with an optional title filter.
#[utoipa::path(
    get,
    path = "/jobs",
    params(ListJobsParams),
    responses(
        (status = 200, description = "Page of jobs", body = JobPageBody),
        (status = 503, description = "Job store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobs"
)]
#[get("/jobs")]
pub async fn list_jobs(
    state: web::Data<HttpState>,
    params: web::Query<ListJobsParams>,
) -> ApiResult<web::Json<JobPageBody>> {
    let page = state.jobs_query.list_jobs(params.to_listing_query()).await?;
    Ok(web::Json(JobPageBody::from(page)))
}

/// Most recently created jobs first.
#[utoipa::path(
    get,
    path = "/jobs/recent",
    params(LimitParams),
    responses(
        (status = 200, description = "Newest jobs", body = [JobResponseBody]),
        (status = 503, description = "Job store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listRecentJobs"
)]
#[get("/jobs/recent")]
pub async fn list_recent_jobs(
    state: web::Data<HttpState>,
    params: web::Query<LimitParams>,
) -> ApiResult<web::Json<Vec<JobResponseBody>>> {
    let limit = parse_limit(params.limit.as_deref());
    let records = state.jobs_query.list_recent_jobs(limit).await?;
    Ok(web::Json(job_bodies(&records)))
}

/// Highest paid jobs first.
#[utoipa::path(
    get,
    path = "/jobs/top-salary",
    params(LimitParams),
    responses(
        (status = 200, description = "Best paid jobs", body = [JobResponseBody]),
        (status = 503, description = "Job store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listTopSalaryJobs"
)]
#[get("/jobs/top-salary")]
pub async fn list_top_salary_jobs(
    state: web::Data<HttpState>,
    params: web::Query<LimitParams>,
) -> ApiResult<web::Json<Vec<JobResponseBody>>> {
    let limit = parse_limit(params.limit.as_deref());
    let records = state.jobs_query.list_top_salary_jobs(limit).await?;
    Ok(web::Json(job_bodies(&records)))
}

/// Fetch a single job.
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    params(("id" = String, Path, description = "Job identifier (UUID)")),
    responses(
        (status = 200, description = "The job", body = JobResponseBody),
        (status = 404, description = "No such job", body = ErrorSchema),
        (status = 503, description = "Job store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "getJob"
)]
#[get("/jobs/{id}")]
pub async fn get_job(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<JobResponseBody>> {
    let id = parse_job_id(&path)?;
    let record = state.jobs_query.get_job(id).await?;
    Ok(web::Json(JobResponseBody::from(&record)))
}

/// Replace every editable field of a job.
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    params(("id" = String, Path, description = "Job identifier (UUID)")),
    request_body = JobRequestBody,
    responses(
        (status = 200, description = "Job updated", body = MessageResponseBody),
        (status = 400, description = "Invalid job data", body = ErrorSchema),
        (status = 404, description = "No such job", body = ErrorSchema),
        (status = 503, description = "Job store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "updateJob"
)]
#[put("/jobs/{id}")]
pub async fn update_job(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<JobRequestBody>,
) -> ApiResult<web::Json<MessageResponseBody>> {
    let id = parse_job_id(&path)?;
    let draft = payload.into_inner().into_draft()?;
    state.jobs.update_job(id, draft).await?;
    Ok(web::Json(MessageResponseBody::new("job updated successfully")))
}

/// Delete a job permanently.
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    params(("id" = String, Path, description = "Job identifier (UUID)")),
    responses(
        (status = 200, description = "Job deleted", body = MessageResponseBody),
        (status = 404, description = "No such job", body = ErrorSchema),
        (status = 503, description = "Job store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "deleteJob"
)]
#[delete("/jobs/{id}")]
pub async fn delete_job(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponseBody>> {
    let id = parse_job_id(&path)?;
    state.jobs.delete_job(id).await?;
    Ok(web::Json(MessageResponseBody::new("job deleted successfully")))
}

/// Shareable link to the job details page, built from the request host.
///
/// The job is not looked up.
#[utoipa::path(
    get,
    path = "/jobs/{id}/share",
    params(("id" = String, Path, description = "Job identifier (UUID)")),
    responses(
        (status = 200, description = "Absolute details page URL", body = String),
        (status = 404, description = "Identifier is not a UUID", body = ErrorSchema),
        (status = 500, description = "Request host unknown", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "shareJob"
)]
#[get("/jobs/{id}/share")]
pub async fn share_job(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ApiResult<web::Json<String>> {
    let id = parse_job_id(&path)?;
    let info = req.connection_info();
    let link = build_share_link(info.scheme(), info.host(), &state.job_details_path, id)?;
    Ok(web::Json(link))
}

/// Register the job routes. Fixed paths precede `/jobs/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_job)
        .service(list_jobs)
        .service(list_recent_jobs)
        .service(list_top_salary_jobs)
        .service(share_job)
        .service(get_job)
        .service(update_job)
        .service(delete_job);
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
