//! Open notebook documents as seen by the registry.

use super::{CompositeControllerId, ViewType};
use serde::{Deserialize, Serialize};

/// An open notebook document and the controller currently selected for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocument {
    uri: String,
    view_type: ViewType,
    selected_controller: Option<CompositeControllerId>,
}

impl NotebookDocument {
    /// Creates a document with no controller selected.
    #[must_use]
    pub fn new(uri: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            uri: uri.into(),
            view_type,
            selected_controller: None,
        }
    }

    /// Marks `controller_id` as the document's selected controller.
    #[must_use]
    pub fn with_selected_controller(mut self, controller_id: CompositeControllerId) -> Self {
        self.selected_controller = Some(controller_id);
        self
    }

    /// Returns the document URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the view type the document is open in.
    #[must_use]
    pub const fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// Returns the selected controller, if any.
    #[must_use]
    pub const fn selected_controller(&self) -> Option<&CompositeControllerId> {
        self.selected_controller.as_ref()
    }

    /// Replaces the selected controller.
    pub fn select_controller(&mut self, controller_id: Option<CompositeControllerId>) {
        self.selected_controller = controller_id;
    }
}
