//! Domain ports.
//!
//! Driven ports ([`JobRepository`]) are implemented by outbound adapters.
//! Driving ports ([`JobCommand`], [`JobQuery`]) are implemented by domain
//! services and consumed by inbound adapters.

mod job_command;
mod job_query;
mod job_repository;
mod macros;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use job_command::MockJobCommand;
pub use job_command::JobCommand;
#[cfg(test)]
pub use job_query::MockJobQuery;
pub use job_query::JobQuery;
#[cfg(test)]
pub use job_repository::MockJobRepository;
pub use job_repository::{JobRepository, JobRepositoryError, JobSlice};
