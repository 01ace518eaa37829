//! Persistence adapters for the task module.
//!
//! Concrete implementations of the [`crate::task::ports::TaskRepository`]
//! port: a thread-safe in-memory store for tests and embedding, and a
//! Diesel-backed `PostgreSQL` repository for production deployments.

pub mod memory;
pub mod postgres;
