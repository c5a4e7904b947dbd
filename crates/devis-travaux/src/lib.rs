//! Renovation cost estimator, lead and quote intake, and the professional directory.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
