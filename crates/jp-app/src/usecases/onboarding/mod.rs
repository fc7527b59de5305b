//! Onboarding use cases.
//!
//! The wizard's state machine lives in `jp-core`; this module owns the
//! single in-memory instance shared across IPC commands and translates
//! its outcomes into DTOs for the webview.

pub mod orchestrator;

pub use orchestrator::OnboardingOrchestrator;

use jp_core::onboarding::{OnboardingAnswers, OnboardingStep, StepRequirement};

/// Data transfer object for the wizard's visible state.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OnboardingSnapshotDto {
    pub step: OnboardingStep,
    pub cursor: usize,
    pub total_steps: usize,
    pub progress_percent: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub answers: OnboardingAnswers,
    pub can_advance: bool,
    pub blocked_hint: Option<&'static str>,
}

/// Data transfer object for a forward-navigation attempt.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdvanceDto {
    Moved {
        step: OnboardingStep,
    },
    Blocked {
        requirement: StepRequirement,
        hint: &'static str,
    },
    /// Final submission rejected; `message` is the blocking copy
    /// shown to the user.
    Rejected {
        message: String,
    },
    Completed,
}
