//! Onboarding flow state machine.
//!
//! Sequences the fixed step list, holds the partial answers and
//! decides whether forward navigation is currently allowed. Pure
//! in-memory state: the cursor moves ±1 per user action, clamped to
//! the step list, and the accumulated record is handed out exactly
//! when the final step passes the submission check.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::onboarding::answers::{OnboardingAnswers, SalaryRange};
use crate::onboarding::step::OnboardingStep;

/// Requirement gating forward navigation out of a step.
///
/// The variant names the missing piece, evaluated against the
/// accumulated answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRequirement {
    LocationMissing,
    JobTypeMissing,
    ProfessionMissing,
    SalaryNotPositive,
    CvMissing,
}

impl StepRequirement {
    /// Whether the accumulated answers satisfy this requirement.
    pub fn is_satisfied(self, answers: &OnboardingAnswers) -> bool {
        match self {
            StepRequirement::LocationMissing => !answers.location.is_empty(),
            StepRequirement::JobTypeMissing => !answers.job_type.is_empty(),
            StepRequirement::ProfessionMissing => !answers.profession.is_empty(),
            StepRequirement::SalaryNotPositive => answers.salary.is_filled(),
            StepRequirement::CvMissing => answers.uploaded_cv.is_some(),
        }
    }

    /// User-facing hint shown next to the disabled forward button.
    pub fn hint(self) -> &'static str {
        match self {
            StepRequirement::LocationMissing => "Choisis une zone pour continuer",
            StepRequirement::JobTypeMissing => "Choisis un type de contrat",
            StepRequirement::ProfessionMissing => "Dis-nous ton métier",
            StepRequirement::SalaryNotPositive => "Renseigne ta fourchette salariale",
            StepRequirement::CvMissing => "Ajoute ton CV pour qu'on bosse pour toi",
        }
    }
}

/// Final-step submission gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionError {
    #[error("Renseigne ton email pour créer ton compte")]
    EmailMissing,
    #[error("Choisis un mot de passe costaud")]
    PasswordMissing,
    #[error("Tu dois accepter les conditions d'utilisation")]
    TermsNotAccepted,
}

/// Outcome of a forward navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Cursor moved to the next step.
    Moved(OnboardingStep),
    /// The current step's requirement is unmet; cursor unchanged.
    Blocked(StepRequirement),
    /// Final submission rejected; cursor unchanged.
    Rejected(SubmissionError),
    /// The flow is done; the full accumulated record is handed out.
    Completed(Box<OnboardingAnswers>),
}

/// The onboarding wizard controller.
///
/// Invariant: `0 <= cursor < OnboardingStep::ALL.len()` at all times,
/// maintained by `advance`/`retreat`. External input never sets the
/// cursor directly.
#[derive(Debug, Clone, Default)]
pub struct OnboardingFlow {
    cursor: usize,
    answers: OnboardingAnswers,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        OnboardingStep::ALL[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    /// Progress for the header bar: `100 × (cursor + 1) / step_count`,
    /// rounded to the nearest integer.
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::ALL.len() as f64;
        (100.0 * (self.cursor as f64 + 1.0) / total).round() as u8
    }

    /// The requirement currently blocking forward navigation, if any.
    pub fn unmet_requirement(&self) -> Option<StepRequirement> {
        self.step()
            .definition()
            .requirement
            .filter(|req| !req.is_satisfied(&self.answers))
    }

    /// Move forward one step.
    ///
    /// Blocked while the current step's requirement is unmet. On the
    /// last step the submission check runs instead, and success hands
    /// out the full answer record.
    pub fn advance(&mut self) -> Advance {
        if let Some(requirement) = self.unmet_requirement() {
            return Advance::Blocked(requirement);
        }

        if self.cursor + 1 == OnboardingStep::ALL.len() {
            return match self.check_submission() {
                Ok(()) => {
                    debug!(step = ?self.step(), "onboarding flow completed");
                    Advance::Completed(Box::new(self.answers.clone()))
                }
                Err(err) => Advance::Rejected(err),
            };
        }

        self.cursor += 1;
        Advance::Moved(self.step())
    }

    /// Move back one step, floored at the first step.
    pub fn retreat(&mut self) -> OnboardingStep {
        self.cursor = self.cursor.saturating_sub(1);
        self.step()
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.answers.location = location.into();
    }

    pub fn set_job_type(&mut self, job_type: impl Into<String>) {
        self.answers.job_type = job_type.into();
    }

    pub fn set_profession(&mut self, profession: impl Into<String>) {
        self.answers.profession = profession.into();
    }

    pub fn set_salary(&mut self, min: u32, desired: u32) {
        self.answers.salary = SalaryRange { min, desired };
    }

    /// Connect a job-board account if absent, disconnect it if present.
    ///
    /// Idempotent toggle, not an append-only log: toggling the same
    /// name twice returns the set to its original contents.
    pub fn toggle_account(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.answers.connected_accounts.remove(&name) {
            false
        } else {
            self.answers.connected_accounts.insert(name);
            true
        }
    }

    /// Record the local CV file reference (name only, fire-and-forget).
    pub fn attach_cv(&mut self, file_name: impl Into<String>) {
        self.answers.uploaded_cv = Some(file_name.into());
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.answers.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.answers.password = password.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.answers.phone = phone.into();
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        self.answers.accepted_terms = accepted;
    }

    pub fn set_accepted_alerts(&mut self, accepted: bool) {
        self.answers.accepted_alerts = accepted;
    }

    fn check_submission(&self) -> Result<(), SubmissionError> {
        if self.answers.email.is_empty() {
            return Err(SubmissionError::EmailMissing);
        }
        if self.answers.password.is_empty() {
            return Err(SubmissionError::PasswordMissing);
        }
        if !self.answers.accepted_terms {
            return Err(SubmissionError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_at_account_creation() -> OnboardingFlow {
        let mut flow = OnboardingFlow::new();
        flow.set_location("Paris");
        flow.set_job_type("CDI");
        flow.set_profession("Dev Frontend");
        flow.set_salary(42_000, 55_000);
        flow.attach_cv("CV_Frontend_2024.pdf");
        for _ in 0..OnboardingStep::ALL.len() - 1 {
            assert!(matches!(flow.advance(), Advance::Moved(_)));
        }
        assert_eq!(flow.step(), OnboardingStep::AccountCreation);
        flow
    }

    #[test]
    fn advance_is_blocked_until_location_is_chosen() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(
            flow.advance(),
            Advance::Blocked(StepRequirement::LocationMissing)
        );
        assert_eq!(flow.cursor(), 0);

        flow.set_location("Lyon");
        assert_eq!(flow.advance(), Advance::Moved(OnboardingStep::ContractType));
        assert_eq!(flow.cursor(), 1);
    }

    #[test]
    fn advance_never_overshoots_while_predicates_pass() {
        let mut flow = flow_at_account_creation();
        let last = OnboardingStep::ALL.len() - 1;
        assert_eq!(flow.cursor(), last);

        // Submission gating kicks in instead of moving past the end.
        assert_eq!(
            flow.advance(),
            Advance::Rejected(SubmissionError::EmailMissing)
        );
        assert_eq!(flow.cursor(), last);
    }

    #[test]
    fn retreat_from_first_step_stays_at_first_step() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(flow.retreat(), OnboardingStep::Location);
        assert_eq!(flow.cursor(), 0);
    }

    #[test]
    fn retreat_walks_back_one_step() {
        let mut flow = OnboardingFlow::new();
        flow.set_location("Paris");
        flow.advance();
        assert_eq!(flow.retreat(), OnboardingStep::Location);
    }

    #[test]
    fn salary_step_requires_both_bounds_strictly_positive() {
        let mut flow = OnboardingFlow::new();
        flow.set_location("Paris");
        flow.set_job_type("CDI");
        flow.set_profession("DevOps");
        flow.advance();
        flow.advance();
        flow.advance();
        assert_eq!(flow.step(), OnboardingStep::SalaryRange);

        flow.set_salary(42_000, 0);
        assert_eq!(
            flow.advance(),
            Advance::Blocked(StepRequirement::SalaryNotPositive)
        );

        flow.set_salary(42_000, 55_000);
        assert_eq!(
            flow.advance(),
            Advance::Moved(OnboardingStep::AccountLinking)
        );
    }

    #[test]
    fn account_linking_requires_a_cv_reference() {
        let mut flow = OnboardingFlow::new();
        flow.set_location("Paris");
        flow.set_job_type("CDI");
        flow.set_profession("Dev Backend");
        flow.set_salary(45_000, 52_000);
        for _ in 0..4 {
            flow.advance();
        }
        assert_eq!(flow.step(), OnboardingStep::AccountLinking);

        assert_eq!(flow.advance(), Advance::Blocked(StepRequirement::CvMissing));

        flow.attach_cv("CV_Backend_2024.pdf");
        assert_eq!(
            flow.advance(),
            Advance::Moved(OnboardingStep::ProfileAnalysis)
        );
    }

    #[test]
    fn toggling_the_same_account_twice_is_the_identity() {
        let mut flow = OnboardingFlow::new();
        let before = flow.answers().connected_accounts.clone();

        assert!(flow.toggle_account("APEC"));
        assert!(flow.answers().connected_accounts.contains("APEC"));
        assert!(!flow.toggle_account("APEC"));
        assert_eq!(flow.answers().connected_accounts, before);
    }

    #[test]
    fn submission_is_blocked_without_email_even_with_terms_accepted() {
        let mut flow = flow_at_account_creation();
        flow.set_accepted_terms(true);

        assert_eq!(
            flow.advance(),
            Advance::Rejected(SubmissionError::EmailMissing)
        );
    }

    #[test]
    fn submission_is_blocked_without_terms() {
        let mut flow = flow_at_account_creation();
        flow.set_email("john.doe@email.com");
        flow.set_password("costaud-mais-secret");

        assert_eq!(
            flow.advance(),
            Advance::Rejected(SubmissionError::TermsNotAccepted)
        );
    }

    #[test]
    fn submission_hands_out_the_full_accumulated_record() {
        let mut flow = flow_at_account_creation();
        flow.toggle_account("PÔLE EMPLOI");
        flow.set_email("john.doe@email.com");
        flow.set_password("costaud-mais-secret");
        flow.set_phone("06 12 34 56 78");
        flow.set_accepted_terms(true);
        flow.set_accepted_alerts(true);

        match flow.advance() {
            Advance::Completed(answers) => {
                assert_eq!(answers.location, "Paris");
                assert_eq!(answers.job_type, "CDI");
                assert_eq!(answers.profession, "Dev Frontend");
                assert_eq!(answers.salary.min, 42_000);
                assert_eq!(answers.salary.desired, 55_000);
                assert!(answers.connected_accounts.contains("PÔLE EMPLOI"));
                assert_eq!(answers.uploaded_cv.as_deref(), Some("CV_Frontend_2024.pdf"));
                assert_eq!(answers.email, "john.doe@email.com");
                assert!(answers.accepted_terms);
                assert!(answers.accepted_alerts);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn progress_runs_from_first_to_last_step() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(flow.progress_percent(), 14);

        flow.set_location("Paris");
        flow.advance();
        assert_eq!(flow.progress_percent(), 29);

        let flow = flow_at_account_creation();
        assert_eq!(flow.progress_percent(), 100);
    }
}
