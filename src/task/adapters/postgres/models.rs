//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user's identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Deadline timestamp.
    pub deadline: DateTime<Utc>,
    /// Lifecycle status in canonical enum-string form.
    pub status: String,
    /// Estimated duration in minutes.
    pub estimated_time: i64,
    /// Clock-in timestamp.
    pub start_time: Option<DateTime<Utc>>,
    /// Clock-out timestamp.
    pub finish_time: Option<DateTime<Utc>>,
    /// Recorded spent time in minutes.
    pub time_spent: Option<i64>,
    /// Advisory suggestion from the time-accounting policy.
    pub suggestion: Option<String>,
}

/// Insert and update model for task records.
///
/// `None` values are written as `NULL` on update so the policy can clear a
/// previously attached suggestion.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user's identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Deadline timestamp.
    pub deadline: DateTime<Utc>,
    /// Lifecycle status in canonical enum-string form.
    pub status: String,
    /// Estimated duration in minutes.
    pub estimated_time: i64,
    /// Clock-in timestamp.
    pub start_time: Option<DateTime<Utc>>,
    /// Clock-out timestamp.
    pub finish_time: Option<DateTime<Utc>>,
    /// Recorded spent time in minutes.
    pub time_spent: Option<i64>,
    /// Advisory suggestion from the time-accounting policy.
    pub suggestion: Option<String>,
}
