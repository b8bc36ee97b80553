//! HTTP inbound adapter exposing the job catalogue over REST.

pub mod error;
pub mod health;
pub mod jobs;
pub mod schemas;
pub mod state;
pub(crate) mod validation;

pub use error::ApiResult;
