//! Host port for materialising controllers in the editor.

use crate::controller_registry::domain::{CompositeControllerId, NotebookController};
use std::sync::Arc;
use thiserror::Error;

/// Result type for host controller operations.
pub type ControllerHostResult<T> = Result<T, ControllerHostError>;

/// Editor-side registration of controller objects.
///
/// The registry calls [`register`](Self::register) once per new controller,
/// before the controller becomes visible through the registry.
#[cfg_attr(test, mockall::automock)]
pub trait ControllerHost: Send + Sync {
    /// Publishes a newly created controller to the editor.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerHostError::Cancelled`] when the editor tore down
    /// the surface while creation was in flight, or another variant when the
    /// editor rejected the controller.
    fn register(&self, controller: &NotebookController) -> ControllerHostResult<()>;
}

/// Errors returned by host adapters.
#[derive(Debug, Clone, Error)]
pub enum ControllerHostError {
    /// Creation was superseded by a teardown; not a failure.
    #[error("controller creation cancelled")]
    Cancelled,

    /// The editor already knows a controller with this id.
    #[error("controller {0} is already registered with the host")]
    DuplicateRegistration(CompositeControllerId),

    /// Generic host failure.
    #[error("controller host error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ControllerHostError {
    /// Wraps a failure from the host adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }

    /// Returns `true` for benign cancellation.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
