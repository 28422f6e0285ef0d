//! CampLog - trip logging API.
//!
//! Users own trips; trips own locations. Every request is authenticated with
//! an OIDC bearer token, mapped to a local user record on first sight, and
//! may only read or change data that user owns.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
