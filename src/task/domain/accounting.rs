//! Time-accounting policy: elapsed-time evaluation, tolerance handling, and
//! the advisory messages derived from both.
//!
//! The evaluation semantics replicate the service's observable contract:
//! any elapsed-time check on an in-progress task moves it to
//! [`TaskStatus::TimeExceeded`], and the 10% tolerance margin only decides
//! whether an advisory suggestion is attached. See DESIGN.md before changing
//! this.

use super::{Minutes, Task, TaskStatus};
use chrono::{DateTime, TimeDelta, Utc};

const EXCEEDED_SUGGESTION: &str = "Please re-evaluate or adjust the task.";
const CLOCK_OUT_REMINDER: &str = "Time exceeded! Please register the clock-out.";
const WITHIN_ESTIMATE: &str = "Task is within the estimated time.";
const CLOCK_OUT_FORGOTTEN: &str = "You forgot to clock out. Please register the clock-out.";
const WITHIN_ESTIMATE_OR_REGISTERED: &str =
    "Task is within the estimated time or clock-out is already registered.";
const CLOCK_OUT_NO_LONGER_NEEDED: &str =
    "Clock-out is no longer necessary as the task is already completed.";
const CLOCK_OUT_NOT_FORGOTTEN: &str = "Clock-out is not forgotten or the task is not completed.";

/// Evaluates whether the task's estimated time has been exceeded.
///
/// For an in-progress task the status becomes
/// [`TaskStatus::TimeExceeded`] and the suggestion is set when elapsed time
/// breaches the estimate plus a 10% tolerance, cleared otherwise. Tasks in
/// any other status are left untouched.
///
/// Returns whether the task ends up in [`TaskStatus::TimeExceeded`].
pub fn evaluate_exceeded(task: &mut Task, now: DateTime<Utc>) -> bool {
    if task.status() != TaskStatus::InProgress {
        return task.status() == TaskStatus::TimeExceeded;
    }
    let Some(start_time) = task.start_time() else {
        // An in-progress record without a start time cannot be evaluated.
        return false;
    };

    let elapsed = Minutes::between(start_time, now);
    let estimated = task.estimated_time().value();
    // 10% margin, truncated toward zero.
    let tolerance = estimated.div_euclid(10);

    task.set_status(TaskStatus::TimeExceeded);
    if elapsed.value() > estimated.saturating_add(tolerance) {
        task.set_suggestion(Some(EXCEEDED_SUGGESTION.to_owned()));
    } else {
        task.set_suggestion(None);
    }
    true
}

/// Evaluates the task and renders the exceeded-time notification.
///
/// Returns the suggestion text when the evaluation attached one, a
/// clock-out reminder when the task is exceeded without a suggestion, and a
/// within-estimate message otherwise.
pub fn notify_exceeded(task: &mut Task, now: DateTime<Utc>) -> String {
    evaluate_exceeded(task, now);

    if task.status() == TaskStatus::TimeExceeded {
        return task
            .suggestion()
            .map_or_else(|| CLOCK_OUT_REMINDER.to_owned(), str::to_owned);
    }
    WITHIN_ESTIMATE.to_owned()
}

/// Reports whether an in-progress task looks like a forgotten clock-out:
/// past its estimated finish with no clock-out registered.
///
/// Unlike [`evaluate_exceeded`] this is a pure read and never mutates the
/// task.
#[must_use]
pub fn check_clock_out_forgotten(task: &Task, now: DateTime<Utc>) -> &'static str {
    let estimated_finish = task.start_time().and_then(|start_time| {
        TimeDelta::try_minutes(task.estimated_time().value())
            .and_then(|estimate| start_time.checked_add_signed(estimate))
    });

    if task.status() == TaskStatus::InProgress
        && estimated_finish.is_some_and(|boundary| now > boundary)
        && task.finish_time().is_none()
    {
        CLOCK_OUT_FORGOTTEN
    } else {
        WITHIN_ESTIMATE_OR_REGISTERED
    }
}

/// Reports whether a completed task is missing its clock-out record.
#[must_use]
pub fn check_clock_out_forgotten_completed(task: &Task) -> &'static str {
    if task.status() == TaskStatus::Completed && task.finish_time().is_none() {
        CLOCK_OUT_NO_LONGER_NEEDED
    } else {
        CLOCK_OUT_NOT_FORGOTTEN
    }
}
