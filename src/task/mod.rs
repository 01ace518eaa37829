//! Task lifecycle and time accounting for Taylor.
//!
//! This module implements owner-scoped task records, validated creation and
//! editing, the pending → in-progress → completed lifecycle with explicit
//! clock-in/clock-out registration, and the time-accounting policy that
//! flags tasks past their estimate. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
