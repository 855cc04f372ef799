//! Port exposing the notebook documents open in the editor.

use crate::controller_registry::domain::NotebookDocument;

/// Source of currently open notebook documents.
#[cfg_attr(test, mockall::automock)]
pub trait OpenNotebooks: Send + Sync {
    /// Returns a snapshot of the open documents.
    fn open_documents(&self) -> Vec<NotebookDocument>;
}
