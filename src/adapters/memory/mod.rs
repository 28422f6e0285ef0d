//! In-memory adapters - Process-local implementations of the repository ports.
//!
//! Used by tests and by `storage = "memory"` for local development. Every
//! repository built from the same `InMemoryStore` shares its data.

mod location_repository;
mod store;
mod trip_repository;
mod user_repository;

pub use location_repository::InMemoryLocationRepository;
pub use store::InMemoryStore;
pub use trip_repository::InMemoryTripRepository;
pub use user_repository::InMemoryUserRepository;
