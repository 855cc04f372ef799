//! Registry settings loaded from the editor's JSON configuration.

use crate::controller_registry::{
    adapters::memory::{InMemoryHiddenConnections, InMemoryPickerMode, InMemoryServerSelection},
    domain::{ConnectionId, ServerId},
    ports::{KernelPickerMode, PickerModeSource},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filter-related settings.
///
/// # Examples
///
/// ```
/// use kernel_controllers::controller_registry::adapters::settings::RegistrySettings;
/// use kernel_controllers::controller_registry::ports::KernelPickerMode;
///
/// let settings = RegistrySettings::from_json(r#"{ "kernelPickerType": "Insiders" }"#)
///     .expect("valid settings");
/// assert_eq!(settings.kernel_picker_type, KernelPickerMode::Insiders);
/// assert!(settings.hidden_connections.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrySettings {
    /// Which kernel picker is active.
    pub kernel_picker_type: KernelPickerMode,
    /// Connections the user has hidden.
    pub hidden_connections: Vec<ConnectionId>,
    /// Active remote server, if any.
    pub current_server_id: Option<ServerId>,
}

/// Errors returned while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON or has invalid values.
    #[error("invalid registry settings: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RegistrySettings {
    /// Parses settings from a JSON document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is malformed or a
    /// value fails validation (e.g. an empty connection id).
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds a runtime picker mode source seeded from these settings.
    #[must_use]
    pub fn picker_mode_source(&self) -> InMemoryPickerMode {
        InMemoryPickerMode::new(self.kernel_picker_type)
    }

    /// Builds a hidden-connection set seeded from these settings.
    #[must_use]
    pub fn hidden_connection_set(&self) -> InMemoryHiddenConnections {
        InMemoryHiddenConnections::from_ids(self.hidden_connections.iter().cloned())
    }

    /// Builds a server selection seeded from these settings.
    #[must_use]
    pub fn server_selection(&self) -> InMemoryServerSelection {
        let selection = InMemoryServerSelection::new();
        if let Some(server_id) = &self.current_server_id {
            selection.select(server_id.clone());
        }
        selection
    }
}

impl PickerModeSource for RegistrySettings {
    fn picker_mode(&self) -> KernelPickerMode {
        self.kernel_picker_type
    }
}
