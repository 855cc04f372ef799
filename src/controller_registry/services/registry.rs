//! Service layer for notebook controller registration.
//!
//! Provides [`ControllerRegistry`], which keeps connection metadata and
//! controllers co-indexed, deduplicates repeated registrations, applies the
//! [`ConnectionFilter`] and publishes change events.

use super::events::{ChangeEmitter, ChangeListener, SubscriptionId};
use super::ConnectionFilter;
use crate::controller_registry::{
    domain::{
        CompositeControllerId, ConnectionId, ConnectionMetadata, ControllerChangeEvent,
        DisposeListener, NotebookController, ViewType,
    },
    ports::{
        ControllerHost, ControllerHostError, ControllerHostResult, OpenNotebooks,
        RegistryDiagnostics,
    },
};
use mockable::Clock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

/// Collaborators the registry consults.
#[derive(Clone)]
pub struct RegistryCollaborators {
    /// Editor host that materialises controllers.
    pub host: Arc<dyn ControllerHost>,
    /// Visibility policy.
    pub filter: ConnectionFilter,
    /// Open notebook documents, used by the disposal gate.
    pub documents: Arc<dyn OpenNotebooks>,
    /// Sink for absorbed creation failures.
    pub diagnostics: Arc<dyn RegistryDiagnostics>,
}

#[derive(Debug, Default)]
struct RegistryState {
    metadata_by_id: BTreeMap<ConnectionId, ConnectionMetadata>,
    controllers_by_id: BTreeMap<CompositeControllerId, Arc<NotebookController>>,
    active_controller_ids: BTreeSet<CompositeControllerId>,
}

#[derive(Debug, Default)]
struct AddOutcome {
    added: Vec<Arc<NotebookController>>,
    existing: Vec<Arc<NotebookController>>,
}

enum SlotOutcome {
    Created(Arc<NotebookController>),
    Existing(Arc<NotebookController>),
    Filtered,
}

/// Registry of notebook controllers keyed by connection and view type.
///
/// All operations are synchronous and serialised on one internal lock.
/// Ports must not call back into the registry; change listeners and dispose
/// listeners run without the lock held and may.
pub struct ControllerRegistry<C>
where
    C: Clock + Send + Sync,
{
    collaborators: RegistryCollaborators,
    clock: Arc<C>,
    state: Arc<Mutex<RegistryState>>,
    events: Arc<ChangeEmitter>,
}

impl<C> ControllerRegistry<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new(collaborators: RegistryCollaborators, clock: Arc<C>) -> Self {
        Self {
            collaborators,
            clock,
            state: Arc::new(Mutex::new(RegistryState::default())),
            events: Arc::new(ChangeEmitter::default()),
        }
    }

    /// Subscribes to change events.
    pub fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Removes a subscription. Returns `false` when it was already gone.
    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        self.events.unsubscribe(subscription)
    }

    /// Returns the live controllers, ordered by controller id.
    #[must_use]
    pub fn registered(&self) -> Vec<Arc<NotebookController>> {
        self.lock_state().controllers_by_id.values().cloned().collect()
    }

    /// Returns every connection seen so far, ordered by connection id.
    ///
    /// Includes filtered connections and connections whose controllers were
    /// disposed.
    #[must_use]
    pub fn all(&self) -> Vec<ConnectionMetadata> {
        self.lock_state().metadata_by_id.values().cloned().collect()
    }

    /// Registers or refreshes controllers for a batch of connections.
    ///
    /// Publishes at most one change event, listing every controller created
    /// by the batch. A batch that only refreshes existing controllers
    /// publishes nothing.
    pub fn batch_add(&self, connections: &[ConnectionMetadata], view_types: &[ViewType]) {
        let added: Vec<_> = connections
            .iter()
            .flat_map(|connection| self.add_connection(connection, view_types).added)
            .collect();

        if !added.is_empty() {
            self.events.fire(&ControllerChangeEvent::added(added));
        }
    }

    /// Registers or refreshes controllers for one connection.
    ///
    /// Publishes a change event when anything was created and returns the
    /// created controllers followed by the refreshed ones.
    pub fn add_or_update(
        &self,
        connection: &ConnectionMetadata,
        view_types: &[ViewType],
    ) -> Vec<Arc<NotebookController>> {
        let AddOutcome { added, existing } = self.add_connection(connection, view_types);

        if !added.is_empty() {
            self.events
                .fire(&ControllerChangeEvent::added(added.clone()));
        }
        added.into_iter().chain(existing).collect()
    }

    /// Looks up the controller for `connection` in `view_type`.
    #[must_use]
    pub fn get(
        &self,
        connection: &ConnectionMetadata,
        view_type: ViewType,
    ) -> Option<Arc<NotebookController>> {
        let controller_id = view_type.controller_id(connection.id());
        self.lock_state()
            .controllers_by_id
            .get(&controller_id)
            .cloned()
    }

    /// Returns `true` when `connection` is hidden by the filter policy.
    #[must_use]
    pub fn is_filtered(&self, connection: &ConnectionMetadata) -> bool {
        self.collaborators.filter.is_hidden(connection)
    }

    /// Pins controllers backing the active execution environment so they
    /// are never offered for disposal.
    pub fn track_active_controllers(&self, controllers: &[Arc<NotebookController>]) {
        let mut state = self.lock_state();
        state
            .active_controller_ids
            .extend(controllers.iter().map(|controller| controller.id().clone()));
    }

    /// Returns `true` when the UI layer may dispose `controller`: it is not
    /// pinned and no open document has it selected.
    #[must_use]
    pub fn can_controller_be_disposed(&self, controller: &NotebookController) -> bool {
        let pinned = self
            .lock_state()
            .active_controller_ids
            .contains(controller.id());
        if pinned {
            return false;
        }
        !self
            .collaborators
            .documents
            .open_documents()
            .iter()
            .any(|document| controller.is_associated_with_document(document))
    }

    /// Forgets every connection, controller and pin without disposing
    /// anything.
    pub fn reset(&self) {
        *self.lock_state() = RegistryState::default();
    }

    fn add_connection(
        &self,
        connection: &ConnectionMetadata,
        view_types: &[ViewType],
    ) -> AddOutcome {
        debug!(
            connection_id = %connection.id(),
            kind = %connection.kind(),
            ?view_types,
            "creating controllers for connection"
        );
        let mut outcome = AddOutcome::default();

        for &view_type in view_types {
            match self.add_for_view(connection, view_type) {
                Ok(SlotOutcome::Created(controller)) => outcome.added.push(controller),
                Ok(SlotOutcome::Existing(controller)) => outcome.existing.push(controller),
                Ok(SlotOutcome::Filtered) => {}
                Err(err) if err.is_cancellation() => return outcome,
                Err(err) => {
                    error!(
                        connection_id = %connection.id(),
                        kind = %connection.kind(),
                        %view_type,
                        error = %err,
                        "failed to create notebook controller"
                    );
                    self.collaborators
                        .diagnostics
                        .controller_creation_failed(connection, &err);
                    return outcome;
                }
            }
        }
        outcome
    }

    fn add_for_view(
        &self,
        connection: &ConnectionMetadata,
        view_type: ViewType,
    ) -> ControllerHostResult<SlotOutcome> {
        let controller_id = view_type.controller_id(connection.id());
        let mut state = self.lock_state();

        state
            .metadata_by_id
            .insert(connection.id().clone(), connection.clone());

        if let Some(existing) = state.controllers_by_id.get(&controller_id) {
            existing.update_connection(connection.clone(), &*self.clock);
            debug!(
                controller_id = %controller_id,
                "found existing controller, updating its connection"
            );
            return Ok(SlotOutcome::Existing(Arc::clone(existing)));
        }

        if self.is_filtered(connection) {
            debug!(controller_id = %controller_id, "controller excluded by filter");
            return Ok(SlotOutcome::Filtered);
        }

        let controller = Arc::new(NotebookController::new(
            connection.clone(),
            view_type,
            &*self.clock,
        ));
        self.collaborators.host.register(&controller)?;
        if controller.is_disposed() {
            debug!(controller_id = %controller_id, "controller torn down during registration");
            return Err(ControllerHostError::Cancelled);
        }
        controller.on_did_dispose(self.dispose_listener());
        state
            .controllers_by_id
            .insert(controller_id.clone(), Arc::clone(&controller));
        debug!(controller_id = %controller_id, %view_type, "created controller");
        Ok(SlotOutcome::Created(controller))
    }

    /// Builds the listener that drops a disposed controller from the index.
    ///
    /// Connection metadata is kept so a later re-registration starts from
    /// the cached value.
    fn dispose_listener(&self) -> DisposeListener {
        let weak_state = Arc::downgrade(&self.state);
        let weak_events = Arc::downgrade(&self.events);
        Box::new(move |controller: &NotebookController| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let removed = {
                let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
                let is_current = guard
                    .controllers_by_id
                    .get(controller.id())
                    .is_some_and(|current| current.instance_id() == controller.instance_id());
                if is_current {
                    guard.controllers_by_id.remove(controller.id())
                } else {
                    None
                }
            };
            let Some(removed) = removed else {
                return;
            };
            debug!(
                controller_id = %removed.id(),
                view_type = %removed.view_type(),
                "removed disposed controller from registration"
            );
            if let Some(emitter) = weak_events.upgrade() {
                emitter.fire(&ControllerChangeEvent::removed(vec![removed]));
            }
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
