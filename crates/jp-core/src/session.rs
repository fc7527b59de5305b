//! Session domain model
//!
//! The one record that survives an application restart: a single
//! authentication flag. A missing store is equivalent to a default
//! (unauthenticated) session. Partial onboarding progress is never
//! persisted.

/// Persisted session state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// Whether the user has an account and sees the dashboard
    pub is_authenticated: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_unauthenticated() {
        assert!(!Session::default().is_authenticated);
    }

    #[test]
    fn persisted_shape_is_the_single_flag() {
        let json = serde_json::to_value(Session {
            is_authenticated: true,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "is_authenticated": true }));
    }
}
