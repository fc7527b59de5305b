//! Dashboard-related Tauri commands.

use std::sync::Arc;

use jp_app::usecases::dashboard::{ApplicationStatsDto, DashboardOverviewDto};
use tauri::State;
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;

/// Dashboard landing view.
///
/// `is_first_login` is threaded in by the shell: true on the first
/// render right after onboarding completion, false afterwards.
#[tauri::command]
pub async fn get_dashboard_overview(
    runtime: State<'_, Arc<AppRuntime>>,
    is_first_login: bool,
) -> Result<DashboardOverviewDto, String> {
    let span = info_span!("command.dashboard.get_overview", is_first_login);
    async {
        let uc = runtime.usecases().get_dashboard_overview();
        uc.execute(&runtime.config().user_name, is_first_login)
            .await
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Detailed statistics view ("Mes stats").
#[tauri::command]
pub async fn get_application_stats(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<ApplicationStatsDto, String> {
    let span = info_span!("command.dashboard.get_stats");
    async {
        let uc = runtime.usecases().get_application_stats();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}
