//! Session configuration.

use std::time::Duration;

use crate::accuracy::AccuracyLevel;

/// Default session lifetime before the countdown timer force-stops it.
///
/// Bounds the session even when no quit signal ever arrives, so provider
/// resources are never retained indefinitely.
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(10);

/// Default desktop id reported to the location provider.
pub const DEFAULT_DESKTOP_ID: &str = "geopin.desktop";

/// Configuration for one location session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Desktop id identifying the requesting application to the provider.
    pub desktop_id: String,

    /// Accuracy level requested from the provider.
    pub accuracy: AccuracyLevel,

    /// Hard session lifetime; the countdown timer fires once this elapses.
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            desktop_id: DEFAULT_DESKTOP_ID.to_string(),
            accuracy: AccuracyLevel::Exact,
            timeout: DEFAULT_SESSION_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.desktop_id, "geopin.desktop");
        assert_eq!(config.accuracy, AccuracyLevel::Exact);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_timeout_is_configurable() {
        let config = SessionConfig {
            timeout: Duration::from_secs(30),
            ..Default::default()
        };
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
