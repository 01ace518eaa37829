//! Unit and orchestration tests for the task module.

mod support;
