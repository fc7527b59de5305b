use std::sync::Arc;

use jp_core::ports::SessionStorePort;
use jp_core::session::Session;
use tracing::info;

/// Use case for changing the session flag.
///
/// The single writer of the persisted boolean: onboarding completion
/// sets it, the demo logout toggle clears it. No other code touches
/// the store.
pub struct SetAuthenticated {
    session_store: Arc<dyn SessionStorePort>,
}

impl SetAuthenticated {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    /// Persist the new flag value.
    pub async fn execute(&self, is_authenticated: bool) -> anyhow::Result<()> {
        self.session_store
            .save(&Session { is_authenticated })
            .await?;
        info!(is_authenticated, "session flag updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockSessionStore {
        session: Mutex<Option<Session>>,
    }

    #[async_trait::async_trait]
    impl SessionStorePort for MockSessionStore {
        async fn load(&self) -> anyhow::Result<Session> {
            Ok(self.session.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, session: &Session) -> anyhow::Result<()> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn persists_the_flag_both_ways() {
        let store = Arc::new(MockSessionStore {
            session: Mutex::new(None),
        });
        let uc = SetAuthenticated::new(store.clone());

        uc.execute(true).await.unwrap();
        assert!(store.is_authenticated().await.unwrap());

        uc.execute(false).await.unwrap();
        assert!(!store.is_authenticated().await.unwrap());
    }
}
