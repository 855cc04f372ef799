//! Subscriber list for registry change notifications.

use crate::controller_registry::domain::ControllerChangeEvent;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Callback receiving registry change events.
pub type ChangeListener = Arc<dyn Fn(&ControllerChangeEvent) + Send + Sync>;

/// Handle returned by [`ControllerRegistry::subscribe`](super::ControllerRegistry::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(super) struct ChangeEmitter {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, ChangeListener)>>,
}

impl ChangeEmitter {
    pub(super) fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().push((id, listener));
        id
    }

    pub(super) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock_listeners();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Delivers `event` to every subscriber.
    ///
    /// Listeners are called on a snapshot so they may subscribe, unsubscribe
    /// or call back into the registry.
    pub(super) fn fire(&self, event: &ControllerChangeEvent) {
        let snapshot: Vec<ChangeListener> = self
            .lock_listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    fn lock_listeners(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, ChangeListener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
