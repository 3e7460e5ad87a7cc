//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown APEST dimension: {0}")]
    UnknownApestDimension(String),

    #[error("Page must be at least 1, got {0}")]
    InvalidPage(u32),

    #[error("Limit must be between 1 and {max}, got {limit}")]
    InvalidLimit { limit: u32, max: u32 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownApestDimension(_) => "UNKNOWN_APEST_DIMENSION",
            Self::InvalidPage(_) => "INVALID_PAGE",
            Self::InvalidLimit { .. } => "INVALID_LIMIT",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::UnknownApestDimension(_)
                | Self::InvalidPage(_)
                | Self::InvalidLimit { .. }
        )
    }
}
