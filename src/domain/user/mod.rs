//! User domain module.
//!
//! Local user records, provisioned on demand from verified identity claims.

mod aggregate;

pub use aggregate::User;
