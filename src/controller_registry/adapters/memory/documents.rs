//! In-memory set of open notebook documents.

use std::sync::{Arc, PoisonError, RwLock};

use crate::controller_registry::{
    domain::{CompositeControllerId, NotebookDocument},
    ports::OpenNotebooks,
};

/// Open documents kept in opening order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotebookDocuments {
    documents: Arc<RwLock<Vec<NotebookDocument>>>,
}

impl InMemoryNotebookDocuments {
    /// Creates an empty document set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a document, replacing any open document with the same URI.
    pub fn open(&self, document: NotebookDocument) {
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        documents.retain(|existing| existing.uri() != document.uri());
        documents.push(document);
    }

    /// Closes the document at `uri`. Returns `false` when it was not open.
    pub fn close(&self, uri: &str) -> bool {
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        let before = documents.len();
        documents.retain(|existing| existing.uri() != uri);
        documents.len() != before
    }

    /// Changes the controller selected for the document at `uri`.
    ///
    /// Returns `false` when no such document is open.
    pub fn select_controller(&self, uri: &str, controller_id: Option<CompositeControllerId>) -> bool {
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        let Some(document) = documents.iter_mut().find(|document| document.uri() == uri) else {
            return false;
        };
        document.select_controller(controller_id);
        true
    }
}

impl OpenNotebooks for InMemoryNotebookDocuments {
    fn open_documents(&self) -> Vec<NotebookDocument> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
