//! Repository port for owner-scoped task persistence.

use crate::task::domain::{OwnerId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every lookup and mutation is scoped by `(id, owner_id)`: a task that
/// exists under a different owner behaves exactly like a missing task.
///
/// Callers perform non-atomic read-modify-write cycles (load, mutate in
/// memory, [`TaskRepository::update`]). Concurrent updates to the same task
/// resolve as last-write-wins; implementations are not required to detect
/// the race.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task, scoped to the task's owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task matches the
    /// task's `(id, owner_id)` pair.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier, scoped to the given owner.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// owner.
    async fn find_for_owner(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks belonging to the given owner.
    async fn list_for_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes a task, scoped to the given owner. Deletion is immediate and
    /// irreversible.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task matches the
    /// `(id, owner_id)` pair.
    async fn delete_for_owner(&self, id: TaskId, owner_id: OwnerId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// No task matches the requested `(id, owner_id)` pair.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
