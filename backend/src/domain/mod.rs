//! Job catalogue domain.
//!
//! Purpose: define the job posting entity, its expiration rules, the listing
//! request shape, and the services implementing the driving ports. Types here
//! know nothing about HTTP or SQL.
//!
//! Public surface:
//! - [`Job`], [`JobDraft`], [`JobRecord`] and [`JobId`]: the posting entity,
//!   its editable fields, and the read model with derived expiration.
//! - [`ExpirationPolicy`]: pure days-to-expiration calculator.
//! - [`ListingQuery`]: filter plus page request for listings.
//! - [`JobCommandService`] and [`JobQueryService`]: port implementations.
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failures.

mod error;
mod expiration;
mod job;
mod job_catalogue_service;
pub mod listing;
pub mod ports;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::expiration::{EXPIRATION_WINDOW_DAYS, ExpirationPolicy};
pub use self::job::{
    Job, JobDraft, JobField, JobId, JobRecord, JobValidationError, format_created_at,
};
pub use self::job_catalogue_service::{JobCommandService, JobQueryService};
pub use self::listing::ListingQuery;
pub use self::trace_id::TraceId;
