//! Behaviour tests for task clocking and time accounting.

#[path = "task_clocking_steps/mod.rs"]
mod task_clocking_steps_defs;

use rstest_bdd_macros::scenario;
use task_clocking_steps_defs::world::{ClockingWorld, world};

#[scenario(
    path = "tests/features/task_clocking.feature",
    name = "Clock in a pending task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn clock_in_a_pending_task(world: ClockingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_clocking.feature",
    name = "Clock out records the spent time"
)]
#[tokio::test(flavor = "multi_thread")]
async fn clock_out_records_spent_time(world: ClockingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_clocking.feature",
    name = "Clock-in is rejected for a started task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn clock_in_rejected_for_started_task(world: ClockingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_clocking.feature",
    name = "Notification after the estimate is exceeded"
)]
#[tokio::test(flavor = "multi_thread")]
async fn notification_after_estimate_exceeded(world: ClockingWorld) {
    let _ = world;
}
