//! Then steps for task clocking BDD scenarios.

use super::world::{ClockingWorld, run_async};
use rstest_bdd_macros::then;
use taylor::task::{
    domain::{Minutes, TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &ClockingWorld, status: String) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let fetched = run_async(world.service.get(task.id(), world.owner_id))
        .map_err(|err| eyre::eyre!("fetch task for status assertion: {err}"))?;

    if fetched.status() != expected_status {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected_status.as_str(),
            fetched.status().as_str()
        ));
    }
    Ok(())
}

#[then("the recorded spent time is {minutes:u64} minutes")]
fn spent_time_is(world: &ClockingWorld, minutes: u64) -> Result<(), eyre::Report> {
    let expected = i64::try_from(minutes)
        .map_err(|_| eyre::eyre!("minute count out of range in scenario"))?;
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let spent = run_async(world.service.spent_time(task.id(), world.owner_id))
        .map_err(|err| eyre::eyre!("fetch spent time: {err}"))?;

    if spent != Some(Minutes::new(expected)) {
        return Err(eyre::eyre!("expected {expected} spent minutes, found {spent:?}"));
    }
    Ok(())
}

#[then("the clock-in fails because only pending tasks can be started")]
fn clock_in_fails_not_pending(world: &ClockingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_clock_in_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing clock-in result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::NotPendingOnClockIn
        ))
    ) {
        return Err(eyre::eyre!("expected NotPendingOnClockIn error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the notification reads "{text}""#)]
fn notification_reads(world: &ClockingWorld, text: String) -> Result<(), eyre::Report> {
    let notification = world
        .last_notification
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing notification in scenario world"))?;

    if notification != &text {
        return Err(eyre::eyre!("expected notification {text:?}, got {notification:?}"));
    }
    Ok(())
}
