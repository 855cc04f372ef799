//! Port contracts for controller registration.
//!
//! Ports define the editor-agnostic collaborators the registry consults:
//! the host that materialises controllers, the filter inputs, the open
//! documents, and the diagnostics sink.

pub mod diagnostics;
pub mod documents;
pub mod filter;
pub mod host;

pub use diagnostics::RegistryDiagnostics;
pub use documents::OpenNotebooks;
pub use filter::{HiddenConnections, KernelPickerMode, PickerModeSource, ServerSelection};
pub use host::{ControllerHost, ControllerHostError, ControllerHostResult};
