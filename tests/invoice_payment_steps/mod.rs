//! Step definitions for invoice payment scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
