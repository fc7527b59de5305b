//! Application configuration domain model

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration
///
/// Only the configuration the application layer actually consumes; the
/// webview keeps its own presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name used in dashboard greetings
    pub user_name: String,

    /// Boot settings
    pub boot: BootConfig,
}

/// Boot sequence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootConfig {
    /// Fixed artificial delay before the session status is resolved.
    ///
    /// The shell shows a loading card for this duration; the delay
    /// always elapses and cannot be cancelled.
    pub resolve_delay_ms: u64,
}

impl BootConfig {
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_name: "John".to_string(),
            boot: BootConfig {
                resolve_delay_ms: 1000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boot_delay_is_one_second() {
        let config = AppConfig::default();
        assert_eq!(config.boot.resolve_delay(), Duration::from_millis(1000));
    }
}
