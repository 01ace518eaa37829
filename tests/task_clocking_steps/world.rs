//! Shared world state for task clocking BDD scenarios.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use rstest::fixture;
use taylor::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{OwnerId, Task},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Clock the scenarios can advance between steps.
#[derive(Clone)]
pub struct SteppingClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl SteppingClock {
    fn starting_now() -> Self {
        Self {
            now: Arc::new(RwLock::new(Utc::now())),
        }
    }

    /// Moves the scenario clock forward.
    pub fn advance_minutes(&self, minutes: i64) {
        let mut now = self.now.write().expect("clock lock should not be poisoned");
        *now += TimeDelta::minutes(minutes);
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock should not be poisoned")
    }
}

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, SteppingClock>;

/// Scenario world for task clocking behaviour tests.
pub struct ClockingWorld {
    pub clock: SteppingClock,
    pub service: TestTaskService,
    pub owner_id: OwnerId,
    pub current_task: Option<Task>,
    pub last_clock_in_result: Option<Result<Task, TaskLifecycleError>>,
    pub last_notification: Option<String>,
}

impl ClockingWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let clock = SteppingClock::starting_now();
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(clock.clone()),
        );

        Self {
            clock,
            service,
            owner_id: OwnerId::new(),
            current_task: None,
            last_clock_in_result: None,
            last_notification: None,
        }
    }
}

impl Default for ClockingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ClockingWorld {
    ClockingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
