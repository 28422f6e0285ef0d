//! Location domain module.
//!
//! Stops within a trip. Reachable only through the parent trip.

mod aggregate;
mod errors;

pub use aggregate::Location;
pub use errors::LocationError;
