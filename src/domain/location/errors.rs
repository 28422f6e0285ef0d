//! Location-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, LocationId, TripId, ValidationError};

/// Outcome of a failed location operation.
///
/// Only the parent trip can yield `Forbidden`. A location under another trip
/// is reported as `NotFound`, the same as one that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Parent trip was not found.
    TripNotFound(TripId),
    /// Location was not found under the named trip.
    NotFound(LocationId),
    /// Parent trip exists but the requester does not own it.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl LocationError {
    pub fn trip_not_found(id: TripId) -> Self {
        LocationError::TripNotFound(id)
    }
    pub fn not_found(id: LocationId) -> Self {
        LocationError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        LocationError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LocationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        LocationError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            LocationError::TripNotFound(_) => ErrorCode::TripNotFound,
            LocationError::NotFound(_) => ErrorCode::LocationNotFound,
            LocationError::Forbidden => ErrorCode::Forbidden,
            LocationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            LocationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            LocationError::TripNotFound(id) => format!("Trip not found: {}", id),
            LocationError::NotFound(id) => format!("Location not found: {}", id),
            LocationError::Forbidden => "Permission denied".to_string(),
            LocationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            LocationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for LocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LocationError {}

impl From<ValidationError> for LocationError {
    fn from(err: ValidationError) -> Self {
        LocationError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for LocationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => LocationError::Forbidden,
            _ => LocationError::Infrastructure(err.to_string()),
        }
    }
}
