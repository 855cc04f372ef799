//! Step definitions for controller registration BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
