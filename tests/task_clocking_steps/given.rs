//! Given steps for task clocking BDD scenarios.

use super::world::{ClockingWorld, run_async};
use chrono::TimeDelta;
use mockable::Clock;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taylor::task::{domain::Minutes, services::CreateTaskRequest};

#[given(r#"a pending task "{title}" estimated at {estimated_minutes:u64} minutes"#)]
fn pending_task(
    world: &mut ClockingWorld,
    title: String,
    estimated_minutes: u64,
) -> Result<(), eyre::Report> {
    let estimate = i64::try_from(estimated_minutes)
        .map_err(|_| eyre::eyre!("estimate out of range in scenario"))?;
    let deadline = world.clock.utc() + TimeDelta::days(1);
    let request = CreateTaskRequest::new(title, deadline, Minutes::new(estimate));

    let created = run_async(world.service.create(request, world.owner_id))
        .wrap_err("create task for clocking scenario")?;
    world.current_task = Some(created);
    Ok(())
}

#[given("the task has been clocked in")]
fn task_clocked_in(world: &mut ClockingWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let started = run_async(world.service.clock_in(
        task.id(),
        Some(world.clock.utc()),
        world.owner_id,
    ))
    .wrap_err("clock in during scenario setup")?;
    world.current_task = Some(started);
    Ok(())
}
