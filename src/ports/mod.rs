//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Local user records keyed by subject
//! - `TripRepository` - Trips, scoped by owner
//! - `LocationRepository` - Locations, scoped by parent trip
//!
//! ## Authentication Ports
//!
//! - `TokenVerifier` - Bearer token verification

mod location_repository;
mod token_verifier;
mod trip_repository;
mod user_repository;

pub use location_repository::LocationRepository;
pub use token_verifier::TokenVerifier;
pub use trip_repository::TripRepository;
pub use user_repository::UserRepository;
