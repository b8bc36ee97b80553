//! Outbound adapters implementing the job repository port.

pub mod memory;
pub mod persistence;
