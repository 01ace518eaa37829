//! When steps for task clocking BDD scenarios.

use super::world::{ClockingWorld, run_async};
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::when;

#[when("the task is clocked in")]
fn clock_in_task(world: &mut ClockingWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let result = run_async(world.service.clock_in(
        task.id(),
        Some(world.clock.utc()),
        world.owner_id,
    ));
    if let Ok(ref started) = result {
        world.current_task = Some(started.clone());
    }
    world.last_clock_in_result = Some(result);
    Ok(())
}

#[when("{minutes:u64} minutes pass")]
fn minutes_pass(world: &mut ClockingWorld, minutes: u64) -> Result<(), eyre::Report> {
    let advance_by =
        i64::try_from(minutes).map_err(|_| eyre::eyre!("minute count out of range in scenario"))?;
    world.clock.advance_minutes(advance_by);
    Ok(())
}

#[when("the task is clocked out")]
fn clock_out_task(world: &mut ClockingWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let finished = run_async(world.service.clock_out(
        task.id(),
        world.clock.utc(),
        world.owner_id,
    ))
    .wrap_err("clock out during scenario")?;
    world.current_task = Some(finished);
    Ok(())
}

#[when("the exceeded-time notification is requested")]
fn request_notification(world: &mut ClockingWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let notification = run_async(world.service.notify_exceeded(task.id(), world.owner_id))
        .wrap_err("request exceeded-time notification")?;
    world.last_notification = Some(notification);
    Ok(())
}
