//! Identifier types for the controller registry domain.

use super::ControllerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Suffix appended to a connection id to form the interactive controller id.
///
/// Connection ids ending with this suffix are rejected so the notebook and
/// interactive namespaces never overlap.
pub const INTERACTIVE_CONTROLLER_ID_SUFFIX: &str = "_Interactive";

/// Stable identity of a kernel connection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Creates a validated connection identifier.
    ///
    /// The value is kept verbatim, so ids differing only in surrounding
    /// whitespace stay distinct.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerDomainError::EmptyConnectionId`] when the value is
    /// blank, or [`ControllerDomainError::ReservedConnectionIdSuffix`] when it
    /// ends with [`INTERACTIVE_CONTROLLER_ID_SUFFIX`].
    pub fn new(value: impl Into<String>) -> Result<Self, ControllerDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(ControllerDomainError::EmptyConnectionId);
        }

        if raw.ends_with(INTERACTIVE_CONTROLLER_ID_SUFFIX) {
            return Err(ControllerDomainError::ReservedConnectionIdSuffix(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ControllerDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConnectionId> for String {
    fn from(value: ConnectionId) -> Self {
        value.0
    }
}

impl AsRef<str> for ConnectionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a remote Jupyter server.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerId(String);

impl ServerId {
    /// Creates a validated server identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerDomainError::EmptyServerId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ControllerDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ControllerDomainError::EmptyServerId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServerId {
    type Error = ControllerDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ServerId> for String {
    fn from(value: ServerId) -> Self {
        value.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry key of a controller, derived from a connection id and a view
/// type.
///
/// Only [`ViewType::controller_id`](super::ViewType::controller_id) builds
/// these, which keeps the derivation in one place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeControllerId(String);

impl CompositeControllerId {
    pub(super) const fn from_derived(value: String) -> Self {
        Self(value)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CompositeControllerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CompositeControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one controller object.
///
/// A controller recreated after disposal keeps its composite id but receives
/// a fresh instance id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerInstanceId(Uuid);

impl ControllerInstanceId {
    /// Creates a new random instance identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ControllerInstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControllerInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
