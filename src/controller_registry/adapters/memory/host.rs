//! Host adapter that records registrations instead of talking to an editor.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::controller_registry::{
    domain::{CompositeControllerId, NotebookController},
    ports::{ControllerHost, ControllerHostError, ControllerHostResult},
};

/// Records every controller published to it.
///
/// Failures can be primed per controller id to exercise the registry's
/// error handling.
#[derive(Debug, Clone, Default)]
pub struct RecordingControllerHost {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    registered: Vec<CompositeControllerId>,
    failures: BTreeMap<CompositeControllerId, ControllerHostError>,
}

impl RecordingControllerHost {
    /// Creates a host that accepts every controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes registration of `controller_id` fail with `error` until
    /// [`clear_failure`](Self::clear_failure) is called.
    pub fn fail_with(&self, controller_id: CompositeControllerId, error: ControllerHostError) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failures
            .insert(controller_id, error);
    }

    /// Removes a primed failure.
    pub fn clear_failure(&self, controller_id: &CompositeControllerId) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failures
            .remove(controller_id);
    }

    /// Returns the ids of every accepted controller, in registration order.
    #[must_use]
    pub fn registered_ids(&self) -> Vec<CompositeControllerId> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .registered
            .clone()
    }
}

impl ControllerHost for RecordingControllerHost {
    fn register(&self, controller: &NotebookController) -> ControllerHostResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(error) = state.failures.get(controller.id()) {
            return Err(error.clone());
        }
        state.registered.push(controller.id().clone());
        Ok(())
    }
}
