//! # jp-core
//!
//! Core domain models and business logic for JobPilot.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod jobs;
pub mod onboarding;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use dashboard::{DashboardSignals, DashboardState, DashboardVariant, FocusArea, TimeOfDay};
pub use onboarding::{Advance, OnboardingAnswers, OnboardingFlow, OnboardingStep};
pub use session::Session;
