//! Trip-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, TripId, ValidationError};

/// Outcome of a failed trip operation.
///
/// `NotFound` covers both "no such trip" and "not in this owner's scope";
/// `Forbidden` is reserved for a trip that exists but belongs to someone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripError {
    /// Trip was not found.
    NotFound(TripId),
    /// Trip exists but the requester does not own it.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl TripError {
    pub fn not_found(id: TripId) -> Self {
        TripError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        TripError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TripError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        TripError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TripError::NotFound(_) => ErrorCode::TripNotFound,
            TripError::Forbidden => ErrorCode::Forbidden,
            TripError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TripError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            TripError::NotFound(id) => format!("Trip not found: {}", id),
            TripError::Forbidden => "Permission denied".to_string(),
            TripError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TripError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TripError {}

impl From<ValidationError> for TripError {
    fn from(err: ValidationError) -> Self {
        TripError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for TripError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => TripError::Forbidden,
            ErrorCode::ValidationFailed => TripError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => TripError::Infrastructure(err.to_string()),
        }
    }
}
