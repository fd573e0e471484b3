//! Service configuration
//!
//! One [`ServiceConfig`] is shared by every dispatch of an orchestrator
//! instance. It is read-mostly: reads take a whole-object snapshot and
//! updates replace the whole object, so no dispatch can observe a torn,
//! partially-updated configuration.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Retry and timeout tuning for per-advisor calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Per-advisor call deadline in milliseconds
    pub timeout_ms: u64,
    /// Number of attempts per advisor (including the first)
    pub retry_attempts: u32,
    /// Base backoff in milliseconds; attempt N waits `retry_delay_ms * N`
    pub retry_delay_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            retry_attempts: 3,
            retry_delay_ms: 1_000,
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Linear backoff before the attempt following `attempt` (1-indexed)
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_delay_ms.saturating_mul(attempt as u64))
    }
}

/// Partial configuration update; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfigPatch {
    pub timeout_ms: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
}

impl ServiceConfigPatch {
    /// Resolve this patch against a base configuration
    pub fn apply(&self, base: ServiceConfig) -> ServiceConfig {
        ServiceConfig {
            timeout_ms: self.timeout_ms.unwrap_or(base.timeout_ms),
            retry_attempts: self.retry_attempts.unwrap_or(base.retry_attempts),
            retry_delay_ms: self.retry_delay_ms.unwrap_or(base.retry_delay_ms),
        }
    }
}

/// Shared, atomically-swapped configuration handle
#[derive(Debug, Clone, Default)]
pub struct SharedServiceConfig {
    inner: Arc<RwLock<ServiceConfig>>,
}

impl SharedServiceConfig {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the current configuration
    pub fn snapshot(&self) -> ServiceConfig {
        *self.inner.read().expect("config lock poisoned")
    }

    /// Apply a patch as a single whole-object swap and return the result
    pub fn update(&self, patch: ServiceConfigPatch) -> ServiceConfig {
        let mut guard = self.inner.write().expect("config lock poisoned");
        *guard = patch.apply(*guard);
        *guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.retry_delay_ms, 1_000);
    }

    #[test]
    fn test_linear_backoff() {
        let config = ServiceConfig {
            retry_delay_ms: 250,
            ..Default::default()
        };
        assert_eq!(config.backoff(1), Duration::from_millis(250));
        assert_eq!(config.backoff(3), Duration::from_millis(750));
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let shared = SharedServiceConfig::new(ServiceConfig::default());
        let updated = shared.update(ServiceConfigPatch {
            timeout_ms: Some(5_000),
            ..Default::default()
        });
        assert_eq!(updated.timeout_ms, 5_000);
        assert_eq!(updated.retry_attempts, 3);
        assert_eq!(shared.snapshot(), updated);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let shared = SharedServiceConfig::new(ServiceConfig::default());
        let before = shared.snapshot();
        shared.update(ServiceConfigPatch {
            retry_attempts: Some(1),
            ..Default::default()
        });
        assert_eq!(before.retry_attempts, 3);
        assert_eq!(shared.snapshot().retry_attempts, 1);
    }
}
