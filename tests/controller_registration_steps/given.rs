//! Given steps for controller registration BDD scenarios.

use super::world::{ControllerWorld, parse_connection_id};
use eyre::WrapErr;
use kernel_controllers::controller_registry::domain::{
    ConnectionKind, ConnectionMetadata, ServerId, ViewType,
};
use rstest_bdd_macros::given;

#[given(r#"a local connection "{id}""#)]
fn a_local_connection(world: &mut ControllerWorld, id: String) -> Result<(), eyre::Report> {
    let connection = ConnectionMetadata::local(
        parse_connection_id(&id)?,
        ConnectionKind::StartUsingLocalKernelSpec,
        format!("Kernel {id}"),
    )
    .wrap_err("build local connection")?;
    world.pending_connections.push(connection);
    Ok(())
}

#[given(r#"a remote connection "{id}" on server "{server}""#)]
fn a_remote_connection(
    world: &mut ControllerWorld,
    id: String,
    server: String,
) -> Result<(), eyre::Report> {
    let connection = ConnectionMetadata::remote(
        parse_connection_id(&id)?,
        ConnectionKind::StartUsingRemoteKernelSpec,
        ServerId::new(server).wrap_err("parse server id")?,
        format!("Remote kernel {id}"),
    )
    .wrap_err("build remote connection")?;
    world.pending_connections.push(connection);
    Ok(())
}

#[given(r#"the active remote server is "{server}""#)]
fn active_remote_server(world: &mut ControllerWorld, server: String) -> Result<(), eyre::Report> {
    world
        .servers
        .select(ServerId::new(server).wrap_err("parse server id")?);
    Ok(())
}

#[given(r#"the user has hidden "{id}""#)]
fn user_has_hidden(world: &mut ControllerWorld, id: String) -> Result<(), eyre::Report> {
    world.hidden.hide(parse_connection_id(&id)?);
    Ok(())
}

#[given("the connections have been batch added for the notebook view")]
fn connections_already_added(world: &mut ControllerWorld) {
    world
        .registry
        .batch_add(&world.pending_connections, &[ViewType::JupyterNotebook]);
}
