//! Diagnostics sink that reports through `tracing`.

use crate::controller_registry::{
    domain::ConnectionMetadata,
    ports::{ControllerHostError, RegistryDiagnostics},
};
use tracing::warn;

/// Emits one structured warning per creation failure, tagged with the
/// connection kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl RegistryDiagnostics for TracingDiagnostics {
    fn controller_creation_failed(
        &self,
        connection: &ConnectionMetadata,
        error: &ControllerHostError,
    ) {
        warn!(
            event = "failed_to_create_notebook_controller",
            kind = %connection.kind(),
            connection_id = %connection.id(),
            error = %error,
            "notebook controller creation failed"
        );
    }
}
