use std::time::Duration;

use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] docket_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] docket_core::error::CoreError),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),

    #[error("Lookup timed out after {0:?}")]
    LookupTimeout(Duration),

    #[error("Not authenticated")]
    NotAuthenticated,

    /// Access was denied. Carries no reason.
    #[error("Forbidden")]
    Forbidden,

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
