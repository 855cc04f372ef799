//! Visibility policy for kernel connections.

use crate::controller_registry::{
    domain::ConnectionMetadata,
    ports::{HiddenConnections, KernelPickerMode, PickerModeSource, ServerSelection},
};
use std::sync::Arc;

/// Decides which connections get controllers.
#[derive(Clone)]
pub struct ConnectionFilter {
    picker_mode: Arc<dyn PickerModeSource>,
    hidden: Arc<dyn HiddenConnections>,
    servers: Arc<dyn ServerSelection>,
}

impl ConnectionFilter {
    /// Creates a filter over the three policy inputs.
    #[must_use]
    pub fn new(
        picker_mode: Arc<dyn PickerModeSource>,
        hidden: Arc<dyn HiddenConnections>,
        servers: Arc<dyn ServerSelection>,
    ) -> Self {
        Self {
            picker_mode,
            hidden,
            servers,
        }
    }

    /// Returns `true` when no controller should be created for `connection`.
    ///
    /// The advanced picker does its own filtering, so nothing is hidden in
    /// [`KernelPickerMode::Insiders`]. Otherwise a connection is hidden when
    /// the user hid it, or when it is remote and belongs to a server other
    /// than the active one.
    #[must_use]
    pub fn is_hidden(&self, connection: &ConnectionMetadata) -> bool {
        if self.picker_mode.picker_mode() == KernelPickerMode::Insiders {
            return false;
        }
        let user_hidden = self.hidden.is_hidden(connection.id());
        let other_server = connection.is_remote()
            && self.servers.current_server_id().as_ref() != connection.server_id();
        user_hidden || other_server
    }
}
