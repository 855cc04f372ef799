//! Change notifications published by the controller registry.

use super::NotebookController;
use std::sync::Arc;

/// A batch of controller additions and removals.
#[derive(Debug, Clone, Default)]
pub struct ControllerChangeEvent {
    added: Vec<Arc<NotebookController>>,
    removed: Vec<Arc<NotebookController>>,
}

impl ControllerChangeEvent {
    /// Creates an event announcing newly registered controllers.
    #[must_use]
    pub const fn added(added: Vec<Arc<NotebookController>>) -> Self {
        Self {
            added,
            removed: Vec::new(),
        }
    }

    /// Creates an event announcing controllers that left the registry.
    #[must_use]
    pub const fn removed(removed: Vec<Arc<NotebookController>>) -> Self {
        Self {
            added: Vec::new(),
            removed,
        }
    }

    /// Returns the controllers added in this batch.
    #[must_use]
    pub fn added_controllers(&self) -> &[Arc<NotebookController>] {
        &self.added
    }

    /// Returns the controllers removed in this batch.
    #[must_use]
    pub fn removed_controllers(&self) -> &[Arc<NotebookController>] {
        &self.removed
    }

    /// Returns `true` when the event carries no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
