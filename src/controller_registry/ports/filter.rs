//! Ports consulted by the connection visibility filter.

use crate::controller_registry::domain::{ConnectionId, ServerId};
use serde::{Deserialize, Serialize};

/// Which kernel picker the editor is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelPickerMode {
    /// The classic picker; the registry filters controllers itself.
    #[default]
    Stable,
    /// The advanced picker; filtering is left to the picker UI.
    Insiders,
}

/// Feature configuration source for the picker mode.
#[cfg_attr(test, mockall::automock)]
pub trait PickerModeSource: Send + Sync {
    /// Returns the active picker mode.
    fn picker_mode(&self) -> KernelPickerMode;
}

/// User preference listing connections the user chose to hide.
#[cfg_attr(test, mockall::automock)]
pub trait HiddenConnections: Send + Sync {
    /// Returns `true` when the user hid `connection_id`.
    fn is_hidden(&self, connection_id: &ConnectionId) -> bool;
}

/// Remote server the user is currently pointed at.
#[cfg_attr(test, mockall::automock)]
pub trait ServerSelection: Send + Sync {
    /// Returns the active remote server, if any.
    fn current_server_id(&self) -> Option<ServerId>;
}
