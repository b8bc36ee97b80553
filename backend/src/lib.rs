//! Job board backend.
//!
//! Stores job postings, derives their expiry from creation time and serves
//! them over a REST API. The crate follows a ports-and-adapters layout:
//! [`domain`] holds the model and services, [`inbound`] the HTTP adapter and
//! [`outbound`] the in-memory and PostgreSQL job stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
