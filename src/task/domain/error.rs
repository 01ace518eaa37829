//! Error types for task domain validation and lifecycle preconditions.

use thiserror::Error;

/// Broad classification of a domain error for transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDomainErrorKind {
    /// Malformed input; never retryable.
    InvalidArgument,
    /// Operation not valid for the current lifecycle state.
    InvalidState,
}

/// Errors returned while validating task fields or applying lifecycle
/// transitions.
///
/// The display strings are part of the observable service contract and are
/// consumed verbatim by API clients; do not reword them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is blank at creation time.
    #[error("Cannot create task with blank title")]
    BlankTitleOnCreate,

    /// The deadline is not strictly in the future at creation time.
    #[error("Cannot create task with outdated deadline")]
    OutdatedDeadlineOnCreate,

    /// The title is blank when editing.
    #[error("Cannot edit task with blank title")]
    BlankTitleOnEdit,

    /// The deadline is not strictly in the future when editing.
    #[error("Cannot edit task with outdated deadline")]
    OutdatedDeadlineOnEdit,

    /// The estimated duration is negative.
    #[error("estimated time must not be negative, got {0} minutes")]
    NegativeEstimatedTime(i64),

    /// No start time was supplied for clock-in.
    #[error("Start time cannot be null")]
    MissingStartTime,

    /// The supplied start time lies after the current time.
    #[error("Start time cannot be in the future")]
    StartTimeInFuture,

    /// Clock-in requires a pending task.
    #[error("Only pending tasks can be started")]
    NotPendingOnClockIn,

    /// Clock-out requires an in-progress task.
    #[error("Task must be in progress to be clocked out")]
    NotInProgressOnClockOut,

    /// Completion requires an in-progress task.
    #[error("Task must be in progress to be marked as completed")]
    NotInProgressOnCompletion,
}

impl TaskDomainError {
    /// Returns the error classification used by transport layers to pick a
    /// client-facing status.
    #[must_use]
    pub const fn kind(&self) -> TaskDomainErrorKind {
        match self {
            Self::BlankTitleOnCreate
            | Self::OutdatedDeadlineOnCreate
            | Self::BlankTitleOnEdit
            | Self::OutdatedDeadlineOnEdit
            | Self::NegativeEstimatedTime(_)
            | Self::MissingStartTime
            | Self::StartTimeInFuture => TaskDomainErrorKind::InvalidArgument,
            Self::NotPendingOnClockIn
            | Self::NotInProgressOnClockOut
            | Self::NotInProgressOnCompletion => TaskDomainErrorKind::InvalidState,
        }
    }
}

/// Error returned while parsing task statuses from client input or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid status: {0}")]
pub struct ParseTaskStatusError(pub String);
