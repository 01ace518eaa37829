//! Service layer orchestrating task commands and queries against storage.

use crate::task::{
    domain::{
        self, Minutes, OwnerId, ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for creating a task.
///
/// Required fields are non-optional by construction; only the description
/// may be omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    deadline: DateTime<Utc>,
    estimated_time: Minutes,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        deadline: DateTime<Utc>,
        estimated_time: Minutes,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            deadline,
            estimated_time,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for editing a task's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: String,
    description: Option<String>,
    deadline: DateTime<Utc>,
}

impl EditTaskRequest {
    /// Creates an edit request with the replacement title and deadline.
    #[must_use]
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            deadline,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or lifecycle precondition failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// A status filter named an unknown status.
    #[error(transparent)]
    UnknownStatus(#[from] ParseTaskStatusError),

    /// No task matches the requested `(id, owner)` pair.
    #[error("Task not found")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task command and query orchestration service.
///
/// The sole entry point over the task domain: loads the owner-scoped task,
/// applies lifecycle or time-accounting behaviour, and persists the result.
/// All time-dependent behaviour reads the injected clock exactly once per
/// operation and passes the instant down explicitly.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    async fn find_task_or_error(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Task> {
        self.repository
            .find_for_owner(id, owner_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Creates and persists a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when field validation fails
    /// and repository errors when persistence rejects the task.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Task> {
        let task = Task::create(
            request.title,
            request.description,
            request.deadline,
            request.estimated_time,
            owner_id,
            self.clock.utc(),
        )?;
        self.repository.store(&task).await?;
        debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier, scoped to the owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches the
    /// `(id, owner)` pair.
    pub async fn get(&self, id: TaskId, owner_id: OwnerId) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(id, owner_id).await
    }

    /// Lists all tasks belonging to the owner.
    ///
    /// # Errors
    ///
    /// Returns repository errors when the listing fails.
    pub async fn list_by_owner(&self, owner_id: OwnerId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_for_owner(owner_id).await?)
    }

    /// Lists the owner's tasks currently in the named status.
    ///
    /// The status name is matched case-insensitively against the canonical
    /// status strings.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownStatus`] when the name does not
    /// match a known status.
    pub async fn filter_by_status(
        &self,
        status_name: &str,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let status = TaskStatus::try_from(status_name)?;
        let tasks = self.repository.list_for_owner(owner_id).await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.status() == status)
            .collect())
    }

    /// Replaces a task's title, description, and deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches and
    /// [`TaskLifecycleError::Domain`] when a field invariant is violated.
    pub async fn edit(
        &self,
        id: TaskId,
        request: EditTaskRequest,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task_or_error(id, owner_id).await?;
        task.rename(request.title)?;
        task.set_description(request.description);
        task.set_deadline(request.deadline, self.clock.utc())?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches the
    /// `(id, owner)` pair.
    pub async fn delete(&self, id: TaskId, owner_id: OwnerId) -> TaskLifecycleResult<()> {
        self.find_task_or_error(id, owner_id).await?;
        self.repository.delete_for_owner(id, owner_id).await?;
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Registers a clock-in on a pending task.
    ///
    /// The start time arrives from the transport layer and may be absent,
    /// which is rejected before the task is touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the start time is
    /// missing, in the future, or the task is not pending, and
    /// [`TaskLifecycleError::NotFound`] when no task matches.
    pub async fn clock_in(
        &self,
        id: TaskId,
        start_time: Option<DateTime<Utc>>,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task_or_error(id, owner_id).await?;
        let start = start_time.ok_or(TaskDomainError::MissingStartTime)?;
        task.clock_in(start, self.clock.utc())?;
        self.repository.update(&task).await?;
        debug!(task_id = %id, "clock-in registered");
        Ok(task)
    }

    /// Registers a clock-out on an in-progress task and records the spent
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the task is not in
    /// progress and [`TaskLifecycleError::NotFound`] when no task matches.
    pub async fn clock_out(
        &self,
        id: TaskId,
        finish_time: DateTime<Utc>,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task_or_error(id, owner_id).await?;
        task.clock_out(finish_time)?;
        self.repository.update(&task).await?;
        debug!(task_id = %id, "clock-out registered");
        Ok(task)
    }

    /// Marks an in-progress task completed without a clock-out.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the task is not in
    /// progress and [`TaskLifecycleError::NotFound`] when no task matches.
    pub async fn mark_completed(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task_or_error(id, owner_id).await?;
        task.mark_completed()?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Returns the recorded spent time, or `None` before clock-out.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches.
    pub async fn spent_time(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<Option<Minutes>> {
        let task = self.find_task_or_error(id, owner_id).await?;
        Ok(task.time_spent())
    }

    /// Evaluates whether the task has exceeded its estimate, persisting the
    /// status change the evaluation makes on an in-progress task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches and
    /// repository errors when persisting the evaluation fails.
    pub async fn check_exceeded(&self, id: TaskId, owner_id: OwnerId) -> TaskLifecycleResult<bool> {
        let mut task = self.find_task_or_error(id, owner_id).await?;
        let was_in_progress = task.status() == TaskStatus::InProgress;
        let exceeded = domain::accounting::evaluate_exceeded(&mut task, self.clock.utc());
        if was_in_progress {
            self.repository.update(&task).await?;
            warn!(task_id = %id, "task moved to TIME_EXCEEDED");
        }
        Ok(exceeded)
    }

    /// Evaluates the task and returns the exceeded-time notification text,
    /// persisting the status change the evaluation makes on an in-progress
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches and
    /// repository errors when persisting the evaluation fails.
    pub async fn notify_exceeded(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<String> {
        let mut task = self.find_task_or_error(id, owner_id).await?;
        let was_in_progress = task.status() == TaskStatus::InProgress;
        let notification = domain::accounting::notify_exceeded(&mut task, self.clock.utc());
        if was_in_progress {
            self.repository.update(&task).await?;
            warn!(task_id = %id, "task moved to TIME_EXCEEDED");
        }
        Ok(notification)
    }

    /// Reports whether the task looks like a forgotten clock-out. Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches.
    pub async fn check_clock_out_forgotten(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<String> {
        let task = self.find_task_or_error(id, owner_id).await?;
        Ok(domain::accounting::check_clock_out_forgotten(&task, self.clock.utc()).to_owned())
    }

    /// Reports whether a completed task is missing its clock-out record.
    /// Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches.
    pub async fn check_clock_out_forgotten_completed(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskLifecycleResult<String> {
        let task = self.find_task_or_error(id, owner_id).await?;
        Ok(domain::accounting::check_clock_out_forgotten_completed(&task).to_owned())
    }
}
