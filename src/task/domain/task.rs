//! Task aggregate root: persisted fields, invariants, and lifecycle
//! transitions.

use super::{Minutes, OwnerId, TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Field invariants are enforced at the point of mutation, not just at
/// construction: a task can never hold a blank title or a deadline that was
/// in the past when it was set. The serialized representation uses the
/// camelCase field names of the persisted record contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    owner_id: OwnerId,
    title: String,
    description: Option<String>,
    deadline: DateTime<Utc>,
    status: TaskStatus,
    estimated_time: Minutes,
    start_time: Option<DateTime<Utc>>,
    finish_time: Option<DateTime<Utc>>,
    time_spent: Option<Minutes>,
    suggestion: Option<String>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: OwnerId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted estimated duration.
    pub estimated_time: Minutes,
    /// Persisted clock-in time, if any.
    pub start_time: Option<DateTime<Utc>>,
    /// Persisted clock-out time, if any.
    pub finish_time: Option<DateTime<Utc>>,
    /// Persisted spent-time record, if any.
    pub time_spent: Option<Minutes>,
    /// Persisted advisory suggestion, if any.
    pub suggestion: Option<String>,
}

impl Task {
    /// Creates a new pending task owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTitleOnCreate`] when the title is
    /// blank, [`TaskDomainError::OutdatedDeadlineOnCreate`] when the deadline
    /// is not strictly after `now`, and
    /// [`TaskDomainError::NegativeEstimatedTime`] when the estimate is
    /// negative.
    pub fn create(
        title: impl Into<String>,
        description: Option<String>,
        deadline: DateTime<Utc>,
        estimated_time: Minutes,
        owner_id: OwnerId,
        now: DateTime<Utc>,
    ) -> Result<Self, TaskDomainError> {
        let new_title = title.into();
        if is_blank(&new_title) {
            return Err(TaskDomainError::BlankTitleOnCreate);
        }
        if deadline <= now {
            return Err(TaskDomainError::OutdatedDeadlineOnCreate);
        }
        if estimated_time.is_negative() {
            return Err(TaskDomainError::NegativeEstimatedTime(
                estimated_time.value(),
            ));
        }

        Ok(Self {
            id: TaskId::new(),
            owner_id,
            title: new_title,
            description,
            deadline,
            status: TaskStatus::Pending,
            estimated_time,
            start_time: None,
            finish_time: None,
            time_spent: None,
            suggestion: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            deadline: data.deadline,
            status: data.status,
            estimated_time: data.estimated_time,
            start_time: data.start_time,
            finish_time: data.finish_time,
            time_spent: data.time_spent,
            suggestion: data.suggestion,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the estimated duration.
    #[must_use]
    pub const fn estimated_time(&self) -> Minutes {
        self.estimated_time
    }

    /// Returns the clock-in time, if work has started.
    #[must_use]
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Returns the clock-out time, if registered.
    #[must_use]
    pub const fn finish_time(&self) -> Option<DateTime<Utc>> {
        self.finish_time
    }

    /// Returns the recorded spent time, present only after clock-out.
    #[must_use]
    pub const fn time_spent(&self) -> Option<Minutes> {
        self.time_spent
    }

    /// Returns the advisory suggestion, if the time-accounting policy
    /// attached one.
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTitleOnEdit`] when the new title is
    /// blank.
    pub fn rename(&mut self, title: impl Into<String>) -> Result<(), TaskDomainError> {
        let new_title = title.into();
        if is_blank(&new_title) {
            return Err(TaskDomainError::BlankTitleOnEdit);
        }
        self.title = new_title;
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replaces the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::OutdatedDeadlineOnEdit`] when the new
    /// deadline is not strictly after `now`.
    pub fn set_deadline(
        &mut self,
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), TaskDomainError> {
        if deadline <= now {
            return Err(TaskDomainError::OutdatedDeadlineOnEdit);
        }
        self.deadline = deadline;
        Ok(())
    }

    /// Registers the clock-in that starts active work.
    ///
    /// The start time may lie in the past (late registration) but never
    /// after `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::StartTimeInFuture`] when `start_time` is
    /// after `now` and [`TaskDomainError::NotPendingOnClockIn`] when the
    /// task is not pending.
    pub fn clock_in(
        &mut self,
        start_time: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), TaskDomainError> {
        if start_time > now {
            return Err(TaskDomainError::StartTimeInFuture);
        }
        if self.status != TaskStatus::Pending {
            return Err(TaskDomainError::NotPendingOnClockIn);
        }
        self.start_time = Some(start_time);
        self.status = TaskStatus::InProgress;
        Ok(())
    }

    /// Registers the clock-out that ends active work and records the spent
    /// time as whole minutes between clock-in and clock-out.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotInProgressOnClockOut`] when the task is
    /// not in progress.
    pub fn clock_out(&mut self, finish_time: DateTime<Utc>) -> Result<(), TaskDomainError> {
        // An in-progress task always carries its start time; a record
        // missing one is treated as not in progress.
        let start_time = match (self.status, self.start_time) {
            (TaskStatus::InProgress, Some(start_time)) => start_time,
            _ => return Err(TaskDomainError::NotInProgressOnClockOut),
        };
        self.finish_time = Some(finish_time);
        self.time_spent = Some(Minutes::between(start_time, finish_time));
        self.status = TaskStatus::Completed;
        Ok(())
    }

    /// Marks the task completed without registering a clock-out.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotInProgressOnCompletion`] when the task
    /// is not in progress.
    pub fn mark_completed(&mut self) -> Result<(), TaskDomainError> {
        if self.status != TaskStatus::InProgress {
            return Err(TaskDomainError::NotInProgressOnCompletion);
        }
        self.status = TaskStatus::Completed;
        Ok(())
    }

    /// Overwrites the status. Reserved for the time-accounting policy, which
    /// enforces its own preconditions.
    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Overwrites the advisory suggestion. Reserved for the time-accounting
    /// policy.
    pub(crate) fn set_suggestion(&mut self, suggestion: Option<String>) {
        self.suggestion = suggestion;
    }
}

/// Returns whether a title consists only of whitespace.
fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}
