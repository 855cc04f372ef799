//! Diagnostics port for failures the registry absorbs.

use super::ControllerHostError;
use crate::controller_registry::domain::ConnectionMetadata;

/// Sink for controller creation failures.
///
/// Creation failures never reach the caller of the registry; this port is
/// where they become visible.
#[cfg_attr(test, mockall::automock)]
pub trait RegistryDiagnostics: Send + Sync {
    /// Reports that a controller for `connection` could not be created.
    fn controller_creation_failed(
        &self,
        connection: &ConnectionMetadata,
        error: &ControllerHostError,
    );
}
