//! When steps for controller registration BDD scenarios.

use super::world::{ControllerWorld, parse_connection_id};
use kernel_controllers::controller_registry::domain::ViewType;
use rstest_bdd_macros::when;

#[when("the connections are batch added for both view types")]
fn batch_add_both_views(world: &mut ControllerWorld) {
    world
        .registry
        .batch_add(&world.pending_connections, &ViewType::ALL);
}

#[when("the connections are batch added for the notebook view")]
fn batch_add_notebook_view(world: &mut ControllerWorld) {
    world
        .registry
        .batch_add(&world.pending_connections, &[ViewType::JupyterNotebook]);
}

#[when(r#"the controller "{id}" is disposed"#)]
fn dispose_controller(world: &mut ControllerWorld, id: String) -> Result<(), eyre::Report> {
    let controller = world
        .registry
        .registered()
        .into_iter()
        .find(|controller| controller.id().as_str() == id)
        .ok_or_else(|| eyre::eyre!("no registered controller '{id}'"))?;
    controller.dispose();
    Ok(())
}

#[when(r#"the user unhides "{id}""#)]
fn user_unhides(world: &mut ControllerWorld, id: String) -> Result<(), eyre::Report> {
    let connection_id = parse_connection_id(&id)?;
    if !world.hidden.unhide(&connection_id) {
        return Err(eyre::eyre!("connection '{id}' was not hidden"));
    }
    Ok(())
}
