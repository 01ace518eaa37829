//! Step definitions for task clocking behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
