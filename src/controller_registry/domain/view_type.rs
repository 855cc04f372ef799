//! Notebook surfaces a controller can serve.

use super::{
    CompositeControllerId, ConnectionId, INTERACTIVE_CONTROLLER_ID_SUFFIX, ParseViewTypeError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notebook view type.
///
/// Every connection gets its own controller per view type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViewType {
    /// The primary notebook editor.
    #[serde(rename = "jupyter-notebook")]
    JupyterNotebook,
    /// The interactive window.
    #[serde(rename = "interactive")]
    Interactive,
}

impl ViewType {
    /// Both view types, notebook first.
    pub const ALL: [Self; 2] = [Self::JupyterNotebook, Self::Interactive];

    /// Returns the canonical view type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JupyterNotebook => "jupyter-notebook",
            Self::Interactive => "interactive",
        }
    }

    /// Derives the controller id for a connection shown in this view.
    ///
    /// The notebook view owns the bare connection id; the interactive view
    /// appends [`INTERACTIVE_CONTROLLER_ID_SUFFIX`].
    #[must_use]
    pub fn controller_id(self, connection_id: &ConnectionId) -> CompositeControllerId {
        let derived = match self {
            Self::JupyterNotebook => connection_id.as_str().to_owned(),
            Self::Interactive => format!("{connection_id}{INTERACTIVE_CONTROLLER_ID_SUFFIX}"),
        };
        CompositeControllerId::from_derived(derived)
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = ParseViewTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "jupyter-notebook" => Ok(Self::JupyterNotebook),
            "interactive" => Ok(Self::Interactive),
            _ => Err(ParseViewTypeError(value.to_owned())),
        }
    }
}
