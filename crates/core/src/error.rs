#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Tenant not found: {0}")]
    TenantNotFound(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
