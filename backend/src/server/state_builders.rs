//! Builds the HTTP state from the configured job store.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::warn;

use jobboard::domain::ports::JobRepository;
use jobboard::domain::{JobCommandService, JobQueryService};
use jobboard::inbound::http::state::HttpState;
use jobboard::outbound::memory::InMemoryJobRepository;
use jobboard::outbound::persistence::DieselJobRepository;

use super::ServerConfig;

fn job_services<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> HttpState
where
    R: JobRepository + 'static,
{
    HttpState::new(
        Arc::new(JobCommandService::new(Arc::clone(&repo), Arc::clone(&clock))),
        Arc::new(JobQueryService::new(repo, clock)),
    )
}

/// Wire the job services over PostgreSQL when a pool is configured and over
/// the in-memory store otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => job_services(Arc::new(DieselJobRepository::new(pool.clone())), clock),
        None => {
            warn!("no database configured; jobs are kept in memory and lost on restart");
            job_services(Arc::new(InMemoryJobRepository::new()), clock)
        }
    };
    web::Data::new(state.with_job_details_path(config.job_details_path.clone()))
}
