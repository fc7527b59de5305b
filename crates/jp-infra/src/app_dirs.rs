//! Application data directory resolution.

use std::path::PathBuf;

use anyhow::Context;

/// Platform data directory for JobPilot (`…/jobpilot`).
///
/// The session file lives here; nothing else is persisted.
pub fn resolve_app_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("platform data directory unavailable")?;
    Ok(base.join("jobpilot"))
}
