//! JobPilot application orchestration layer.
//!
//! This crate contains the use cases driving the onboarding wizard,
//! the session shell and the dashboard, expressed over the port traits
//! of `jp-core`.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
