//! Notebook controller registration.
//!
//! Maps kernel connection metadata onto per-view-type controller objects,
//! deduplicates repeated registrations, filters connections the user should
//! not see, and publishes change events to the UI layer. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
