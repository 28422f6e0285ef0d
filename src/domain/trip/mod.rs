//! Trip domain module.
//!
//! Handles the trip lifecycle: creation by an owner, full-replacement
//! updates, and deletion (which cascades to the trip's locations).

mod aggregate;
mod errors;

pub use aggregate::Trip;
pub use errors::TripError;
