//! Then steps for controller registration BDD scenarios.

use super::world::ControllerWorld;
use rstest_bdd_macros::then;

#[then("the registered controller count is {count:usize}")]
fn registered_count(world: &mut ControllerWorld, count: usize) -> Result<(), eyre::Report> {
    let registered = world.registry.registered();
    if registered.len() != count {
        return Err(eyre::eyre!(
            "expected {count} controllers, found {}",
            registered.len()
        ));
    }
    Ok(())
}

#[then(r#"a controller with id "{id}" is registered"#)]
fn controller_registered(world: &mut ControllerWorld, id: String) -> Result<(), eyre::Report> {
    let found = world
        .registry
        .registered()
        .iter()
        .any(|controller| controller.id().as_str() == id);
    if !found {
        return Err(eyre::eyre!("expected controller '{id}' to be registered"));
    }
    Ok(())
}

#[then("the known connection count is {count:usize}")]
fn known_connection_count(world: &mut ControllerWorld, count: usize) -> Result<(), eyre::Report> {
    let known = world.registry.all();
    if known.len() != count {
        return Err(eyre::eyre!(
            "expected {count} known connections, found {}",
            known.len()
        ));
    }
    Ok(())
}

#[then("the change event count is {count:usize}")]
fn change_event_count(world: &mut ControllerWorld, count: usize) -> Result<(), eyre::Report> {
    let published = world.event_count()?;
    if published != count {
        return Err(eyre::eyre!(
            "expected {count} change events, found {published}"
        ));
    }
    Ok(())
}
