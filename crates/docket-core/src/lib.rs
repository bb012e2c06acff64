//! Shared configuration, error types and tracing setup for the docket workspace.

pub mod config;
pub mod error;
pub mod telemetry;
