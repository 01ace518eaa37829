//! Taylor: personal task tracking and time accounting.
//!
//! This crate implements the core of a personal task-tracking service:
//! owner-scoped task records, the clock-in/clock-out lifecycle state
//! machine, and the tolerance-based time-accounting policy that detects
//! exceeded estimates and derives advisory notifications.
//!
//! # Architecture
//!
//! Taylor follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! User identity and HTTP transport remain external collaborators: the
//! service consumes an opaque authenticated owner identifier and exposes
//! transport-agnostic operations.

pub mod task;
