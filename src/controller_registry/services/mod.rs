//! Application services for controller registration.

mod events;
mod filter;
mod registry;

pub use events::{ChangeListener, SubscriptionId};
pub use filter::ConnectionFilter;
pub use registry::{ControllerRegistry, RegistryCollaborators};
