//! Session-related Tauri commands.

use std::sync::Arc;

use jp_app::usecases::session::SessionStatusDto;
use tauri::State;
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::map_err;

/// Resolve the session status at boot.
///
/// Sleeps the configured simulated delay, then reads the persisted
/// flag; the webview shows the loading card until this returns.
#[tauri::command]
pub async fn resolve_session(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<SessionStatusDto, String> {
    let span = info_span!("command.session.resolve");
    async {
        let uc = runtime.usecases().resolve_session();
        uc.execute().await.map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Change the session flag (demo toggle / logout).
#[tauri::command]
pub async fn set_authenticated(
    runtime: State<'_, Arc<AppRuntime>>,
    is_authenticated: bool,
) -> Result<(), String> {
    let span = info_span!("command.session.set_authenticated", is_authenticated);
    async {
        let uc = runtime.usecases().set_authenticated();
        uc.execute(is_authenticated).await.map_err(map_err)
    }
    .instrument(span)
    .await
}
