//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every job catalogue endpoint, the health probes and
//! the schema wrappers for domain types. Swagger UI serves it in debug builds
//! and `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::jobs::{
    CreateJobResponseBody, JobPageBody, JobRequestBody, JobResponseBody, MessageResponseBody,
    PageMetadataBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job board API",
        description = "Create, browse, rank and share job postings with automatic expiry."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::jobs::create_job,
        crate::inbound::http::jobs::list_jobs,
        crate::inbound::http::jobs::list_recent_jobs,
        crate::inbound::http::jobs::list_top_salary_jobs,
        crate::inbound::http::jobs::get_job,
        crate::inbound::http::jobs::update_job,
        crate::inbound::http::jobs::delete_job,
        crate::inbound::http::jobs::share_job,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        JobRequestBody,
        JobResponseBody,
        CreateJobResponseBody,
        MessageResponseBody,
        JobPageBody,
        PageMetadataBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "jobs", description = "Job postings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
