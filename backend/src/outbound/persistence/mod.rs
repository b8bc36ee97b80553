//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.

mod diesel_basic_error_mapping;
mod diesel_job_repository;
mod models;
mod pool;
mod schema;

pub use diesel_job_repository::DieselJobRepository;
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
