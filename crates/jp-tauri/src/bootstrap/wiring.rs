//! Dependency injection.
//!
//! Creates the infra implementations and groups them into `AppDeps`.
//! This is the only module allowed to depend on jp-infra and jp-app
//! simultaneously, and the privilege is only for assembly: no business
//! logic, no configuration validation, no decision making.

use std::path::PathBuf;
use std::sync::Arc;

use jp_app::AppDeps;
use jp_core::config::AppConfig;
use jp_infra::{resolve_app_data_dir, FileSessionStore, StaticJobFeed, SystemClock, TokioDelay};

use super::runtime::AppRuntime;

/// Group the infra adapters for the given data directory.
pub fn build_deps(data_dir: PathBuf) -> AppDeps {
    AppDeps {
        session_store: Arc::new(FileSessionStore::with_defaults(data_dir)),
        job_feed: Arc::new(StaticJobFeed),
        clock: Arc::new(SystemClock),
        delay: Arc::new(TokioDelay),
    }
}

/// Assemble the runtime against the platform data directory.
pub fn create_runtime() -> anyhow::Result<Arc<AppRuntime>> {
    let data_dir = resolve_app_data_dir()?;
    log::info!("app data dir: {}", data_dir.display());

    let deps = build_deps(data_dir);
    Ok(Arc::new(AppRuntime::new(deps, AppConfig::default())))
}
