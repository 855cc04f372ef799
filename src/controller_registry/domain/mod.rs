//! Domain model for notebook controller registration.
//!
//! The domain covers kernel connection metadata, the identifiers derived
//! from it, and the controller objects the UI layer consumes. Host editor
//! concerns stay behind the ports in [`crate::controller_registry::ports`].

mod connection;
mod controller;
mod document;
mod error;
mod event;
mod ids;
mod view_type;

pub use connection::{ConnectionKind, ConnectionMetadata};
pub use controller::{DisposeListener, NotebookController};
pub use document::NotebookDocument;
pub use error::{ControllerDomainError, ParseConnectionKindError, ParseViewTypeError};
pub use event::ControllerChangeEvent;
pub use ids::{
    CompositeControllerId, ConnectionId, ControllerInstanceId, INTERACTIVE_CONTROLLER_ID_SUFFIX,
    ServerId,
};
pub use view_type::ViewType;
