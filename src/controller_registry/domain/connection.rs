//! Kernel connection metadata.

use super::{ConnectionId, ControllerDomainError, ParseConnectionKindError, ServerId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a kernel connection reaches its backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    /// Launches a local kernel from a kernel spec.
    StartUsingLocalKernelSpec,
    /// Launches a local kernel from a Python interpreter.
    StartUsingPythonInterpreter,
    /// Launches a kernel from a kernel spec on a remote server.
    StartUsingRemoteKernelSpec,
    /// Attaches to a kernel already running on a remote server.
    ConnectToLiveRemoteKernel,
}

impl ConnectionKind {
    /// Returns the canonical kind string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartUsingLocalKernelSpec => "start-using-local-kernel-spec",
            Self::StartUsingPythonInterpreter => "start-using-python-interpreter",
            Self::StartUsingRemoteKernelSpec => "start-using-remote-kernel-spec",
            Self::ConnectToLiveRemoteKernel => "connect-to-live-remote-kernel",
        }
    }

    /// Returns `true` for kinds that belong to a remote server.
    #[must_use]
    pub const fn is_remote(self) -> bool {
        matches!(
            self,
            Self::StartUsingRemoteKernelSpec | Self::ConnectToLiveRemoteKernel
        )
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionKind {
    type Err = ParseConnectionKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "start-using-local-kernel-spec" => Ok(Self::StartUsingLocalKernelSpec),
            "start-using-python-interpreter" => Ok(Self::StartUsingPythonInterpreter),
            "start-using-remote-kernel-spec" => Ok(Self::StartUsingRemoteKernelSpec),
            "connect-to-live-remote-kernel" => Ok(Self::ConnectToLiveRemoteKernel),
            _ => Err(ParseConnectionKindError(value.to_owned())),
        }
    }
}

/// Metadata describing one kernel connection.
///
/// Values are replaced wholesale; the registry keeps the latest value seen
/// for each [`ConnectionId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConnectionMetadata", into = "RawConnectionMetadata")]
pub struct ConnectionMetadata {
    id: ConnectionId,
    kind: ConnectionKind,
    display_name: String,
    interpreter_version: Option<String>,
    server_id: Option<ServerId>,
}

impl ConnectionMetadata {
    /// Creates metadata for a local connection.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerDomainError::EmptyDisplayName`] when the display
    /// name is blank, or [`ControllerDomainError::MissingServerId`] when
    /// `kind` is remote.
    pub fn local(
        id: ConnectionId,
        kind: ConnectionKind,
        display_name: impl Into<String>,
    ) -> Result<Self, ControllerDomainError> {
        Self::validated(id, kind, &display_name.into(), None)
    }

    /// Creates metadata for a connection hosted on a remote server.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerDomainError::EmptyDisplayName`] when the display
    /// name is blank, or [`ControllerDomainError::UnexpectedServerId`] when
    /// `kind` is local.
    pub fn remote(
        id: ConnectionId,
        kind: ConnectionKind,
        server_id: ServerId,
        display_name: impl Into<String>,
    ) -> Result<Self, ControllerDomainError> {
        Self::validated(id, kind, &display_name.into(), Some(server_id))
    }

    fn validated(
        id: ConnectionId,
        kind: ConnectionKind,
        display_name: &str,
        server_id: Option<ServerId>,
    ) -> Result<Self, ControllerDomainError> {
        let trimmed_name = display_name.trim();
        if trimmed_name.is_empty() {
            return Err(ControllerDomainError::EmptyDisplayName);
        }

        match (kind.is_remote(), server_id.is_some()) {
            (true, false) => Err(ControllerDomainError::MissingServerId {
                connection_id: id.to_string(),
                kind: kind.to_string(),
            }),
            (false, true) => Err(ControllerDomainError::UnexpectedServerId {
                connection_id: id.to_string(),
                kind: kind.to_string(),
            }),
            _ => Ok(Self {
                id,
                kind,
                display_name: trimmed_name.to_owned(),
                interpreter_version: None,
                server_id,
            }),
        }
    }

    /// Attaches the interpreter version shown next to the display name.
    #[must_use]
    pub fn with_interpreter_version(mut self, version: impl Into<String>) -> Self {
        self.interpreter_version = normalise_version(&version.into());
        self
    }

    /// Returns the connection identifier.
    #[must_use]
    pub const fn id(&self) -> &ConnectionId {
        &self.id
    }

    /// Returns the connection kind.
    #[must_use]
    pub const fn kind(&self) -> ConnectionKind {
        self.kind
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the interpreter version, if known.
    #[must_use]
    pub fn interpreter_version(&self) -> Option<&str> {
        self.interpreter_version.as_deref()
    }

    /// Returns the owning remote server, present only for remote kinds.
    #[must_use]
    pub const fn server_id(&self) -> Option<&ServerId> {
        self.server_id.as_ref()
    }

    /// Returns `true` when the connection belongs to a remote server.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.kind.is_remote()
    }
}

fn normalise_version(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Unvalidated wire form of [`ConnectionMetadata`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConnectionMetadata {
    id: ConnectionId,
    kind: ConnectionKind,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interpreter_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    server_id: Option<ServerId>,
}

impl TryFrom<RawConnectionMetadata> for ConnectionMetadata {
    type Error = ControllerDomainError;

    fn try_from(raw: RawConnectionMetadata) -> Result<Self, Self::Error> {
        let mut metadata = Self::validated(raw.id, raw.kind, &raw.display_name, raw.server_id)?;
        metadata.interpreter_version = raw
            .interpreter_version
            .and_then(|version| normalise_version(&version));
        Ok(metadata)
    }
}

impl From<ConnectionMetadata> for RawConnectionMetadata {
    fn from(metadata: ConnectionMetadata) -> Self {
        Self {
            id: metadata.id,
            kind: metadata.kind,
            display_name: metadata.display_name,
            interpreter_version: metadata.interpreter_version,
            server_id: metadata.server_id,
        }
    }
}
