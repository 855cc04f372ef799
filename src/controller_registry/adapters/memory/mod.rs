//! In-memory port implementations.
//!
//! These back the integration tests and any embedding that keeps filter
//! state in process.

mod diagnostics;
mod documents;
mod filter;
mod host;

pub use diagnostics::{InMemoryDiagnostics, RecordedFailure};
pub use documents::InMemoryNotebookDocuments;
pub use filter::{InMemoryHiddenConnections, InMemoryPickerMode, InMemoryServerSelection};
pub use host::RecordingControllerHost;
