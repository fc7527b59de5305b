//! File-based session store.
//!
//! Persists the single session flag to a JSON file in the application
//! data directory, the desktop analogue of the browser build's
//! localStorage key. A missing or empty file reads as the default
//! (unauthenticated) session.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use jp_core::ports::SessionStorePort;
use jp_core::session::Session;
use tokio::fs;
use tracing::debug;

pub const DEFAULT_SESSION_FILE: &str = "session.json";

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default filename under `base_dir`.
    pub fn with_defaults(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: base_dir.into().join(DEFAULT_SESSION_FILE),
        }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create session dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write through a temp file + rename so the target is either the
    /// previous contents or the fully written new contents.
    async fn atomic_write(&self, content: &str) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp session failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp session to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn load(&self) -> anyhow::Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read session failed: {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(Session::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse session failed: {}", self.path.display()))
    }

    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(session).context("serialize session failed")?;
        self.atomic_write(&json).await?;
        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .await
                .with_context(|| format!("remove session failed: {}", self.path.display()))?;
        }
        Ok(())
    }
}
