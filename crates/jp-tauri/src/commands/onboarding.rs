//! Onboarding-related Tauri commands.
//!
//! The wizard state lives in the runtime's cached orchestrator; these
//! commands are thin translations of webview events onto it.

use std::sync::Arc;

use jp_app::usecases::onboarding::{AdvanceDto, OnboardingSnapshotDto};
use jp_core::onboarding::OnboardingStep;
use tauri::State;
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;

/// Current visible state of the wizard.
#[tauri::command]
pub async fn get_onboarding_state(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingSnapshotDto, String> {
    let span = info_span!("command.onboarding.get_state");
    async { Ok(runtime.onboarding().snapshot().await) }
        .instrument(span)
        .await
}

/// Attempt forward navigation.
#[tauri::command]
pub async fn advance_onboarding(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<AdvanceDto, String> {
    let span = info_span!("command.onboarding.advance");
    async {
        runtime
            .onboarding()
            .advance()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

/// Walk back one step (floored at the first).
#[tauri::command]
pub async fn retreat_onboarding(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<OnboardingStep, String> {
    let span = info_span!("command.onboarding.retreat");
    async { Ok(runtime.onboarding().retreat().await) }
        .instrument(span)
        .await
}

/// Start over with empty answers.
#[tauri::command]
pub async fn reset_onboarding(runtime: State<'_, Arc<AppRuntime>>) -> Result<(), String> {
    let span = info_span!("command.onboarding.reset");
    async {
        runtime.onboarding().reset().await;
        Ok(())
    }
    .instrument(span)
    .await
}

#[tauri::command]
pub async fn set_location(
    runtime: State<'_, Arc<AppRuntime>>,
    location: String,
) -> Result<(), String> {
    runtime.onboarding().set_location(location).await;
    Ok(())
}

#[tauri::command]
pub async fn set_job_type(
    runtime: State<'_, Arc<AppRuntime>>,
    job_type: String,
) -> Result<(), String> {
    runtime.onboarding().set_job_type(job_type).await;
    Ok(())
}

#[tauri::command]
pub async fn set_profession(
    runtime: State<'_, Arc<AppRuntime>>,
    profession: String,
) -> Result<(), String> {
    runtime.onboarding().set_profession(profession).await;
    Ok(())
}

/// Record the salary bounds; non-numeric webview input arrives as 0.
#[tauri::command]
pub async fn set_salary_range(
    runtime: State<'_, Arc<AppRuntime>>,
    min: u32,
    desired: u32,
) -> Result<(), String> {
    runtime.onboarding().set_salary(min, desired).await;
    Ok(())
}

/// Idempotent job-board toggle; returns whether the board is now
/// connected.
#[tauri::command]
pub async fn toggle_job_board(
    runtime: State<'_, Arc<AppRuntime>>,
    name: String,
) -> Result<bool, String> {
    let span = info_span!("command.onboarding.toggle_job_board", board = %name);
    async { Ok(runtime.onboarding().toggle_account(name).await) }
        .instrument(span)
        .await
}

/// Record the selected CV file name (bytes never leave the machine).
#[tauri::command]
pub async fn attach_cv(
    runtime: State<'_, Arc<AppRuntime>>,
    file_name: String,
) -> Result<(), String> {
    runtime.onboarding().attach_cv(file_name).await;
    Ok(())
}

/// Record the account-creation fields of the final step.
#[tauri::command]
pub async fn set_account_fields(
    runtime: State<'_, Arc<AppRuntime>>,
    email: String,
    password: String,
    phone: String,
    accepted_terms: bool,
    accepted_alerts: bool,
) -> Result<(), String> {
    runtime
        .onboarding()
        .set_account_fields(email, password, phone, accepted_terms, accepted_alerts)
        .await;
    Ok(())
}
