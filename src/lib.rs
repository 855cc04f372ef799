//! Kernel controllers: notebook controller registration for kernel
//! connections.
//!
//! This crate keeps track of the kernel connections a notebook editor knows
//! about and the controller objects it shows for them, one per connection
//! and notebook view type. It deduplicates repeated registrations, hides
//! connections the user should not see, and tells the UI layer when
//! controllers come and go.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Connection metadata, identifiers and controller objects
//! - **Ports**: Abstract trait interfaces for the editor collaborators
//! - **Adapters**: In-memory, settings and `tracing` implementations of ports
//!
//! # Modules
//!
//! - [`controller_registry`]: Controller registration, filtering and events

pub mod controller_registry;
