//! Error types for controller registry domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing controller registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerDomainError {
    /// The connection identifier is blank.
    #[error("connection id must not be empty")]
    EmptyConnectionId,

    /// The connection identifier collides with the interactive controller
    /// namespace.
    #[error("connection id '{0}' must not end with the reserved suffix '_Interactive'")]
    ReservedConnectionIdSuffix(String),

    /// The server identifier is empty after trimming.
    #[error("server id must not be empty")]
    EmptyServerId,

    /// The connection display name is empty after trimming.
    #[error("connection display name must not be empty")]
    EmptyDisplayName,

    /// A remote connection kind was supplied without a server.
    #[error("connection '{connection_id}' of kind {kind} requires a server id")]
    MissingServerId {
        /// Offending connection identifier.
        connection_id: String,
        /// Connection kind in canonical string form.
        kind: String,
    },

    /// A local connection kind was supplied with a server.
    #[error("connection '{connection_id}' of kind {kind} must not carry a server id")]
    UnexpectedServerId {
        /// Offending connection identifier.
        connection_id: String,
        /// Connection kind in canonical string form.
        kind: String,
    },
}

/// Error returned while parsing a view type from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown notebook view type: {0}")]
pub struct ParseViewTypeError(pub String);

/// Error returned while parsing a connection kind from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown kernel connection kind: {0}")]
pub struct ParseConnectionKindError(pub String);
