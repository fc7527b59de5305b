//! Answers accumulated across the onboarding steps.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Salary expectations in euros per year.
///
/// Non-numeric input coerces to zero at the webview boundary, so a
/// zero bound means "not filled in yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Minimum acceptable
    pub min: u32,
    /// Target
    pub desired: u32,
}

impl SalaryRange {
    /// Both bounds strictly positive.
    pub fn is_filled(&self) -> bool {
        self.min > 0 && self.desired > 0
    }
}

/// Everything the wizard collects, accumulated step by step.
///
/// Plain value record; only presence checks apply. The CV is a local
/// file *name* reference; its bytes never leave the user's machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    pub location: String,
    pub job_type: String,
    pub profession: String,
    pub salary: SalaryRange,
    pub connected_accounts: BTreeSet<String>,
    pub uploaded_cv: Option<String>,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub accepted_terms: bool,
    pub accepted_alerts: bool,
}
