//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the CampLog domain.

mod auth;
mod details;
mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use auth::{AuthError, VerifiedClaims};
pub use details::{EntryDetails, MAX_NAME_LENGTH};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{LocationId, SubjectId, TripId, UserId};
pub use ownership::{BelongsToTrip, OwnedByUser};
pub use timestamp::Timestamp;
