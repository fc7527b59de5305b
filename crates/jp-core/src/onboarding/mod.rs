//! Onboarding domain module.
//!
//! This module defines the onboarding wizard as a pure state machine:
//! a fixed ordered step list, the answers accumulated across steps,
//! and the cursor that walks them. Nothing here is persisted; a page
//! reload starts a fresh flow.

pub mod answers;
pub mod flow;
pub mod step;

pub use answers::{OnboardingAnswers, SalaryRange};
pub use flow::{Advance, OnboardingFlow, StepRequirement, SubmissionError};
pub use step::{OnboardingStep, StepDefinition};
