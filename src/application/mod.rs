//! Application layer - Identity resolution, ownership gate, and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every trust decision lives in `OwnershipGate`; repositories stay dumb.

mod authorization;
pub mod handlers;
mod identity;

#[cfg(test)]
pub(crate) mod test_support;

pub use authorization::OwnershipGate;
pub use identity::IdentityResolver;
