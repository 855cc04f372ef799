//! Adapter implementations for controller registry ports.
//!
//! - [`memory`]: in-memory implementations of every port
//! - [`settings`]: JSON-backed registry settings
//! - [`diagnostics`]: `tracing`-backed diagnostics sink

pub mod diagnostics;
pub mod memory;
pub mod settings;
