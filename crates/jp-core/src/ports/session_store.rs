//! Session store port.
//!
//! This port defines the contract for persisting and retrieving the
//! one session flag that survives a restart. Implementations are
//! provided by the infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

use crate::session::Session;

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Get the persisted session; a missing store is a default session.
    async fn load(&self) -> anyhow::Result<Session>;

    /// Persist the session.
    async fn save(&self, session: &Session) -> anyhow::Result<()>;

    /// Forget the persisted session (demo reset).
    async fn reset(&self) -> anyhow::Result<()>;

    /// Convenience check of the flag.
    async fn is_authenticated(&self) -> anyhow::Result<bool> {
        Ok(self.load().await?.is_authenticated)
    }
}
