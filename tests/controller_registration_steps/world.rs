//! Shared world state for controller registration BDD scenarios.

use std::sync::{Arc, Mutex};

use kernel_controllers::controller_registry::{
    adapters::memory::{
        InMemoryDiagnostics, InMemoryHiddenConnections, InMemoryNotebookDocuments,
        InMemoryPickerMode, InMemoryServerSelection, RecordingControllerHost,
    },
    domain::{ConnectionId, ConnectionMetadata, ControllerChangeEvent},
    ports::KernelPickerMode,
    services::{ConnectionFilter, ControllerRegistry, RegistryCollaborators},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Registry type used by the BDD world.
pub type TestRegistry = ControllerRegistry<DefaultClock>;

/// Scenario world for controller registration behaviour tests.
pub struct ControllerWorld {
    /// The registry under test.
    pub registry: TestRegistry,
    /// User hidden-connection preference.
    pub hidden: InMemoryHiddenConnections,
    /// Active remote server selection.
    pub servers: InMemoryServerSelection,
    /// Connections queued for the next batch.
    pub pending_connections: Vec<ConnectionMetadata>,
    /// Every change event published so far.
    pub events: Arc<Mutex<Vec<ControllerChangeEvent>>>,
}

impl ControllerWorld {
    /// Creates a world with an empty registry in stable picker mode.
    #[must_use]
    pub fn new() -> Self {
        let hidden = InMemoryHiddenConnections::new();
        let servers = InMemoryServerSelection::new();
        let collaborators = RegistryCollaborators {
            host: Arc::new(RecordingControllerHost::new()),
            filter: ConnectionFilter::new(
                Arc::new(InMemoryPickerMode::new(KernelPickerMode::Stable)),
                Arc::new(hidden.clone()),
                Arc::new(servers.clone()),
            ),
            documents: Arc::new(InMemoryNotebookDocuments::new()),
            diagnostics: Arc::new(InMemoryDiagnostics::new()),
        };
        let registry = ControllerRegistry::new(collaborators, Arc::new(DefaultClock));
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        registry.subscribe(Arc::new(move |event: &ControllerChangeEvent| {
            if let Ok(mut recorded) = sink.lock() {
                recorded.push(event.clone());
            }
        }));
        Self {
            registry,
            hidden,
            servers,
            pending_connections: Vec::new(),
            events,
        }
    }

    /// Returns the number of change events published so far.
    ///
    /// # Errors
    ///
    /// Returns an error when the event log lock is poisoned.
    pub fn event_count(&self) -> Result<usize, eyre::Report> {
        self.events
            .lock()
            .map(|recorded| recorded.len())
            .map_err(|err| eyre::eyre!("event log poisoned: {err}"))
    }
}

impl Default for ControllerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ControllerWorld {
    ControllerWorld::default()
}

/// Parses a connection id from a step argument.
///
/// # Errors
///
/// Returns an error when the id fails validation.
pub fn parse_connection_id(raw: &str) -> Result<ConnectionId, eyre::Report> {
    ConnectionId::new(raw).map_err(|err| eyre::eyre!("invalid connection id '{raw}': {err}"))
}
