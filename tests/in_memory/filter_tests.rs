//! In-memory integration tests for connection filtering.

use super::helpers::{
    RegistryContext, connection_id, context, local_connection, remote_connection,
};
use kernel_controllers::controller_registry::{
    domain::{ServerId, ViewType},
    ports::KernelPickerMode,
};
use rstest::rstest;

#[rstest]
fn switching_servers_registers_cached_connections(context: RegistryContext) {
    let connections = [
        remote_connection("r1", "server-a"),
        remote_connection("r2", "server-b"),
    ];
    context
        .servers
        .select(ServerId::new("server-a").expect("valid server id"));
    context
        .registry
        .batch_add(&connections, &[ViewType::JupyterNotebook]);
    assert_eq!(context.registered_ids(), vec!["r1"]);

    context
        .servers
        .select(ServerId::new("server-b").expect("valid server id"));
    context
        .registry
        .batch_add(&context.registry.all(), &[ViewType::JupyterNotebook]);

    assert_eq!(context.registered_ids(), vec!["r1", "r2"]);
}

#[rstest]
fn no_active_server_hides_every_remote_connection(context: RegistryContext) {
    context.registry.batch_add(
        &[remote_connection("r1", "server-a"), local_connection("k1", "Python 3")],
        &[ViewType::JupyterNotebook],
    );

    assert_eq!(context.registered_ids(), vec!["k1"]);
    assert_eq!(context.registry.all().len(), 2);
}

#[rstest]
fn hidden_connection_is_reported_as_filtered(context: RegistryContext) {
    let connection = local_connection("k1", "Python 3");
    context.hidden.hide(connection_id("k1"));

    assert!(context.registry.is_filtered(&connection));

    context.picker.set_mode(KernelPickerMode::Insiders);
    assert!(!context.registry.is_filtered(&connection));
}

#[rstest]
fn clearing_server_selection_hides_remote_connections(context: RegistryContext) {
    let connection = remote_connection("r1", "server-a");
    context
        .servers
        .select(ServerId::new("server-a").expect("valid server id"));
    assert!(!context.registry.is_filtered(&connection));

    context.servers.clear();
    context
        .registry
        .batch_add(&[connection.clone()], &[ViewType::JupyterNotebook]);

    assert!(context.registry.is_filtered(&connection));
    assert!(context.registered_ids().is_empty());
}
