//! In-memory filter inputs.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::controller_registry::{
    domain::{ConnectionId, ServerId},
    ports::{HiddenConnections, KernelPickerMode, PickerModeSource, ServerSelection},
};

/// Picker mode that can be switched at runtime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPickerMode {
    mode: Arc<RwLock<KernelPickerMode>>,
}

impl InMemoryPickerMode {
    /// Creates a source reporting `mode`.
    #[must_use]
    pub fn new(mode: KernelPickerMode) -> Self {
        Self {
            mode: Arc::new(RwLock::new(mode)),
        }
    }

    /// Switches the reported mode.
    pub fn set_mode(&self, mode: KernelPickerMode) {
        *self.mode.write().unwrap_or_else(PoisonError::into_inner) = mode;
    }
}

impl PickerModeSource for InMemoryPickerMode {
    fn picker_mode(&self) -> KernelPickerMode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// User-maintained set of hidden connection ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHiddenConnections {
    hidden: Arc<RwLock<BTreeSet<ConnectionId>>>,
}

impl InMemoryHiddenConnections {
    /// Creates an empty hidden set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hidden set seeded with `ids`.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ConnectionId>) -> Self {
        Self {
            hidden: Arc::new(RwLock::new(ids.into_iter().collect())),
        }
    }

    /// Hides a connection. Returns `false` when it was already hidden.
    pub fn hide(&self, connection_id: ConnectionId) -> bool {
        self.hidden
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(connection_id)
    }

    /// Unhides a connection. Returns `false` when it was not hidden.
    pub fn unhide(&self, connection_id: &ConnectionId) -> bool {
        self.hidden
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(connection_id)
    }
}

impl HiddenConnections for InMemoryHiddenConnections {
    fn is_hidden(&self, connection_id: &ConnectionId) -> bool {
        self.hidden
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(connection_id)
    }
}

/// Remote server selection held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryServerSelection {
    current: Arc<RwLock<Option<ServerId>>>,
}

impl InMemoryServerSelection {
    /// Creates a selection with no active server.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `server_id` the active server.
    pub fn select(&self, server_id: ServerId) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(server_id);
    }

    /// Clears the active server.
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl ServerSelection for InMemoryServerSelection {
    fn current_server_id(&self) -> Option<ServerId> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
