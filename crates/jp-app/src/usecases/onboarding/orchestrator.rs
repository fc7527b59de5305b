use std::sync::Arc;

use jp_core::onboarding::{Advance, OnboardingFlow, OnboardingStep};
use jp_core::ports::SessionStorePort;
use jp_core::session::Session;
use tokio::sync::Mutex;
use tracing::info;

use super::{AdvanceDto, OnboardingSnapshotDto};

/// Owns the one in-memory onboarding flow.
///
/// Cached in the runtime and shared across commands so the cursor and
/// answers survive between IPC calls, but not across restarts:
/// partial progress is never persisted. Completion persists the
/// session flag and resets the flow, so the completed record is
/// handed out exactly once.
pub struct OnboardingOrchestrator {
    flow: Mutex<OnboardingFlow>,
    session_store: Arc<dyn SessionStorePort>,
}

impl OnboardingOrchestrator {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            flow: Mutex::new(OnboardingFlow::new()),
            session_store,
        }
    }

    /// Current visible state of the wizard.
    pub async fn snapshot(&self) -> OnboardingSnapshotDto {
        let flow = self.flow.lock().await;
        let definition = flow.step().definition();
        let blocked = flow.unmet_requirement();

        OnboardingSnapshotDto {
            step: flow.step(),
            cursor: flow.cursor(),
            total_steps: OnboardingStep::ALL.len(),
            progress_percent: flow.progress_percent(),
            title: definition.title,
            subtitle: definition.subtitle,
            answers: flow.answers().clone(),
            can_advance: blocked.is_none(),
            blocked_hint: blocked.map(|req| req.hint()),
        }
    }

    /// Attempt forward navigation; completion persists the session
    /// flag and starts a fresh flow.
    pub async fn advance(&self) -> anyhow::Result<AdvanceDto> {
        let mut flow = self.flow.lock().await;
        match flow.advance() {
            Advance::Moved(step) => Ok(AdvanceDto::Moved { step }),
            Advance::Blocked(requirement) => Ok(AdvanceDto::Blocked {
                requirement,
                hint: requirement.hint(),
            }),
            Advance::Rejected(err) => Ok(AdvanceDto::Rejected {
                message: err.to_string(),
            }),
            Advance::Completed(answers) => {
                self.session_store
                    .save(&Session {
                        is_authenticated: true,
                    })
                    .await?;
                info!(
                    location = %answers.location,
                    profession = %answers.profession,
                    accounts = answers.connected_accounts.len(),
                    "onboarding completed, account created"
                );
                *flow = OnboardingFlow::new();
                Ok(AdvanceDto::Completed)
            }
        }
    }

    pub async fn retreat(&self) -> OnboardingStep {
        self.flow.lock().await.retreat()
    }

    /// Start over with empty answers (demo reset).
    pub async fn reset(&self) {
        *self.flow.lock().await = OnboardingFlow::new();
    }

    pub async fn set_location(&self, location: String) {
        self.flow.lock().await.set_location(location);
    }

    pub async fn set_job_type(&self, job_type: String) {
        self.flow.lock().await.set_job_type(job_type);
    }

    pub async fn set_profession(&self, profession: String) {
        self.flow.lock().await.set_profession(profession);
    }

    pub async fn set_salary(&self, min: u32, desired: u32) {
        self.flow.lock().await.set_salary(min, desired);
    }

    /// Idempotent toggle; returns whether the board is now connected.
    pub async fn toggle_account(&self, name: String) -> bool {
        self.flow.lock().await.toggle_account(name)
    }

    pub async fn attach_cv(&self, file_name: String) {
        self.flow.lock().await.attach_cv(file_name);
    }

    pub async fn set_account_fields(
        &self,
        email: String,
        password: String,
        phone: String,
        accepted_terms: bool,
        accepted_alerts: bool,
    ) {
        let mut flow = self.flow.lock().await;
        flow.set_email(email);
        flow.set_password(password);
        flow.set_phone(phone);
        flow.set_accepted_terms(accepted_terms);
        flow.set_accepted_alerts(accepted_alerts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    struct MockSessionStore {
        session: StdMutex<Option<Session>>,
        saves: AtomicUsize,
    }

    impl MockSessionStore {
        fn new() -> Self {
            Self {
                session: StdMutex::new(None),
                saves: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl SessionStorePort for MockSessionStore {
        async fn load(&self) -> anyhow::Result<Session> {
            Ok(self.session.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, session: &Session) -> anyhow::Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    async fn drive_to_account_creation(orchestrator: &OnboardingOrchestrator) {
        orchestrator.set_location("Paris".into()).await;
        orchestrator.set_job_type("CDI".into()).await;
        orchestrator.set_profession("Dev Frontend".into()).await;
        orchestrator.set_salary(42_000, 55_000).await;
        orchestrator.attach_cv("CV_Frontend_2024.pdf".into()).await;
        for _ in 0..OnboardingStep::ALL.len() - 1 {
            assert!(matches!(
                orchestrator.advance().await.unwrap(),
                AdvanceDto::Moved { .. }
            ));
        }
    }

    #[tokio::test]
    async fn snapshot_reports_the_blocking_requirement() {
        let orchestrator = OnboardingOrchestrator::new(Arc::new(MockSessionStore::new()));

        let snapshot = orchestrator.snapshot().await;
        assert_eq!(snapshot.step, OnboardingStep::Location);
        assert_eq!(snapshot.total_steps, 7);
        assert!(!snapshot.can_advance);
        assert_eq!(snapshot.blocked_hint, Some("Choisis une zone pour continuer"));

        orchestrator.set_location("Lyon".into()).await;
        let snapshot = orchestrator.snapshot().await;
        assert!(snapshot.can_advance);
        assert!(snapshot.blocked_hint.is_none());
    }

    #[tokio::test]
    async fn state_survives_across_calls_like_one_wizard_session() {
        let orchestrator = OnboardingOrchestrator::new(Arc::new(MockSessionStore::new()));

        orchestrator.set_location("Paris".into()).await;
        orchestrator.advance().await.unwrap();
        orchestrator.set_job_type("Freelance".into()).await;
        orchestrator.advance().await.unwrap();

        let snapshot = orchestrator.snapshot().await;
        assert_eq!(snapshot.step, OnboardingStep::Profession);
        assert_eq!(snapshot.answers.location, "Paris");
        assert_eq!(snapshot.answers.job_type, "Freelance");
    }

    #[tokio::test]
    async fn completion_persists_the_flag_exactly_once_and_resets() {
        let store = Arc::new(MockSessionStore::new());
        let orchestrator = OnboardingOrchestrator::new(store.clone());

        drive_to_account_creation(&orchestrator).await;
        orchestrator
            .set_account_fields(
                "john.doe@email.com".into(),
                "costaud-mais-secret".into(),
                "06 12 34 56 78".into(),
                true,
                true,
            )
            .await;

        assert!(matches!(
            orchestrator.advance().await.unwrap(),
            AdvanceDto::Completed
        ));
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
        assert!(store.is_authenticated().await.unwrap());

        // The flow restarted: a second advance is a fresh step-0 block,
        // not a second completion.
        assert!(matches!(
            orchestrator.advance().await.unwrap(),
            AdvanceDto::Blocked { .. }
        ));
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejected_submission_keeps_the_wizard_on_the_last_step() {
        let store = Arc::new(MockSessionStore::new());
        let orchestrator = OnboardingOrchestrator::new(store.clone());

        drive_to_account_creation(&orchestrator).await;
        orchestrator
            .set_account_fields(String::new(), String::new(), String::new(), true, false)
            .await;

        match orchestrator.advance().await.unwrap() {
            AdvanceDto::Rejected { message } => {
                assert_eq!(message, "Renseigne ton email pour créer ton compte");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
        assert_eq!(
            orchestrator.snapshot().await.step,
            OnboardingStep::AccountCreation
        );
    }

    #[tokio::test]
    async fn reset_forgets_partial_progress() {
        let orchestrator = OnboardingOrchestrator::new(Arc::new(MockSessionStore::new()));

        orchestrator.set_location("Nantes".into()).await;
        orchestrator.advance().await.unwrap();
        orchestrator.reset().await;

        let snapshot = orchestrator.snapshot().await;
        assert_eq!(snapshot.step, OnboardingStep::Location);
        assert!(snapshot.answers.location.is_empty());
    }
}
