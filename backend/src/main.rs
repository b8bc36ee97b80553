//! Job board entry-point: loads settings, prepares the job store and serves
//! the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobboard::inbound::http::health::HealthState;
use jobboard::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| std::io::Error::other(format!("settings: {err}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))?;

    let mut config =
        ServerConfig::new(bind_addr).with_job_details_path(settings.job_details_path());

    if let Some(database_url) = settings.database_url.clone() {
        if settings.run_migrations {
            server::run_migrations(database_url.clone()).await?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
        )
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
        info!(max_connections = settings.db_max_connections(), "database pool ready");
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(Some(server::build_prometheus()?));
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
