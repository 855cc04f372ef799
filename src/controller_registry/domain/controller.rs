//! UI-facing notebook controller objects.

use super::{
    CompositeControllerId, ConnectionMetadata, ControllerInstanceId, NotebookDocument, ViewType,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

/// Callback invoked once when a controller is disposed.
pub type DisposeListener = Box<dyn Fn(&NotebookController) + Send + Sync>;

/// One controller per (connection, view type) pair.
///
/// Controllers are shared as `Arc<NotebookController>` between the registry
/// and the UI layer. The registry swaps the connection metadata in place when
/// a known connection is re-supplied; the UI layer decides when to dispose.
pub struct NotebookController {
    id: CompositeControllerId,
    instance_id: ControllerInstanceId,
    view_type: ViewType,
    created_at: DateTime<Utc>,
    state: RwLock<ControllerState>,
    disposed: AtomicBool,
    dispose_listeners: Mutex<Vec<DisposeListener>>,
}

#[derive(Debug, Clone)]
struct ControllerState {
    connection: ConnectionMetadata,
    updated_at: DateTime<Utc>,
}

impl NotebookController {
    /// Creates a controller for `connection` in `view_type`.
    pub(crate) fn new(
        connection: ConnectionMetadata,
        view_type: ViewType,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: view_type.controller_id(connection.id()),
            instance_id: ControllerInstanceId::new(),
            view_type,
            created_at: timestamp,
            state: RwLock::new(ControllerState {
                connection,
                updated_at: timestamp,
            }),
            disposed: AtomicBool::new(false),
            dispose_listeners: Mutex::new(Vec::new()),
        }
    }

    /// Returns the composite controller id.
    #[must_use]
    pub const fn id(&self) -> &CompositeControllerId {
        &self.id
    }

    /// Returns the identity of this controller object.
    #[must_use]
    pub const fn instance_id(&self) -> ControllerInstanceId {
        self.instance_id
    }

    /// Returns the view type this controller serves.
    #[must_use]
    pub const fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// Returns a copy of the current connection metadata.
    #[must_use]
    pub fn connection(&self) -> ConnectionMetadata {
        self.read_state().connection.clone()
    }

    /// Returns the label shown in the kernel picker.
    #[must_use]
    pub fn label(&self) -> String {
        let state = self.read_state();
        let connection = &state.connection;
        connection.interpreter_version().map_or_else(
            || connection.display_name().to_owned(),
            |version| format!("{} ({version})", connection.display_name()),
        )
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest connection update.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.read_state().updated_at
    }

    /// Replaces the connection metadata, e.g. after the interpreter version
    /// of a cached kernel spec changed.
    pub fn update_connection(&self, connection: ConnectionMetadata, clock: &impl Clock) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        state.connection = connection;
        state.updated_at = clock.utc();
    }

    /// Returns `true` when `document` has this controller selected.
    #[must_use]
    pub fn is_associated_with_document(&self, document: &NotebookDocument) -> bool {
        document.view_type() == self.view_type && document.selected_controller() == Some(&self.id)
    }

    /// Registers a callback fired when the controller is disposed.
    ///
    /// Listeners registered after disposal are never called.
    pub fn on_did_dispose(&self, listener: DisposeListener) {
        if self.is_disposed() {
            return;
        }
        self.dispose_listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Disposes the controller and notifies listeners.
    ///
    /// Only the first call has an effect.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        let listeners = std::mem::take(
            &mut *self
                .dispose_listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for listener in &listeners {
            listener(self);
        }
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ControllerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for NotebookController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotebookController")
            .field("id", &self.id)
            .field("instance_id", &self.instance_id)
            .field("view_type", &self.view_type)
            .field("connection", &self.read_state().connection)
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}
