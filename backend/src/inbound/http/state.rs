//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{JobCommand, JobQuery};

/// Path prefix of the public job details page used by share links.
pub const DEFAULT_JOB_DETAILS_PATH: &str = "/jobs";

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Job mutations.
    pub jobs: Arc<dyn JobCommand>,
    /// Job reads.
    pub jobs_query: Arc<dyn JobQuery>,
    /// Details page prefix for share links, without a trailing slash.
    pub job_details_path: String,
}

impl HttpState {
    /// Construct state from the job ports with the default details path.
    pub fn new(jobs: Arc<dyn JobCommand>, jobs_query: Arc<dyn JobQuery>) -> Self {
        Self {
            jobs,
            jobs_query,
            job_details_path: DEFAULT_JOB_DETAILS_PATH.to_owned(),
        }
    }

    /// Override the details page prefix used by share links.
    #[must_use]
    pub fn with_job_details_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.job_details_path = format!("/{}", path.trim_matches('/'));
        self
    }
}
