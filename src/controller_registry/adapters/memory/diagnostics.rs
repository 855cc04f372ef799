//! Diagnostics sink that keeps reported failures for inspection.

use std::sync::{Arc, PoisonError, RwLock};

use crate::controller_registry::{
    domain::{ConnectionId, ConnectionKind, ConnectionMetadata},
    ports::{ControllerHostError, RegistryDiagnostics},
};

/// One reported controller creation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFailure {
    /// Connection whose controller failed.
    pub connection_id: ConnectionId,
    /// Kind of that connection.
    pub kind: ConnectionKind,
    /// Rendered host error.
    pub message: String,
}

/// Collects creation failures in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiagnostics {
    failures: Arc<RwLock<Vec<RecordedFailure>>>,
}

impl InMemoryDiagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the failures reported so far.
    #[must_use]
    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.failures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RegistryDiagnostics for InMemoryDiagnostics {
    fn controller_creation_failed(
        &self,
        connection: &ConnectionMetadata,
        error: &ControllerHostError,
    ) {
        self.failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedFailure {
                connection_id: connection.id().clone(),
                kind: connection.kind(),
                message: error.to_string(),
            });
    }
}
