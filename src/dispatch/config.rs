//! src/dispatch/config.rs
//!
//! Run configuration for a dispatch run.
//!
//! All run-scoped knobs live here and are passed explicitly into the pool,
//! the dispatcher, and each worker; nothing is process-global.
//!
//! Example:
//! ```ignore
//! let config = RunConfig::builder()
//!     .policy(ReleasePolicy::Rate)
//!     .active_workers(4)
//!     .timeout_ms(5_000)
//!     .build();
//! ```

/// When each worker is allowed to begin row processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleasePolicy {
    /// Release every qualifying worker simultaneously.
    All,
    /// Release qualifying workers one at a time with a fixed stagger.
    Rate,
    /// Release only the first worker; each worker releases its successor.
    Relay,
}

/// Default per-run timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default idle-poll interval; sub-10ms keeps release latency low without
/// spinning.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5;

/// Default stagger between activations under [`ReleasePolicy::Rate`].
pub const DEFAULT_RATE_DELAY_MS: u64 = 1;

/// Configuration for one dispatch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Release policy for this run.
    pub policy: ReleasePolicy,
    /// Shared execution budget per worker, measured from the global start.
    pub timeout_ms: u64,
    /// Number of workers to activate (k). Also the row-ownership stride.
    pub active_workers: usize,
    /// Total pool size (W). Defaults to detected hardware parallelism.
    pub pool_size: usize,
    /// Idle-poll sleep used in the worker wait phase.
    pub poll_interval_ms: u64,
    /// Pause between successive activations under the rate policy.
    pub rate_delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            policy: ReleasePolicy::All,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            active_workers: default_pool_size(),
            pool_size: default_pool_size(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            rate_delay_ms: DEFAULT_RATE_DELAY_MS,
        }
    }
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }
}

/// Detected hardware parallelism, falling back to 1 if detection fails.
pub fn default_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Builder for [`RunConfig`] with method chaining.
#[derive(Default)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Set the release policy.
    pub fn policy(mut self, policy: ReleasePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the per-worker execution budget in milliseconds.
    ///
    /// Zero means every released worker expires on its first deadline check
    /// and abandons all of its rows.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// Set the number of workers to activate (k). Must not exceed the pool
    /// size; the runner validates this.
    pub fn active_workers(mut self, k: usize) -> Self {
        self.config.active_workers = k;
        self
    }

    /// Set the total pool size (W). Workers beyond the active count are
    /// spawned but terminated at release time.
    pub fn pool_size(mut self, w: usize) -> Self {
        self.config.pool_size = w;
        self
    }

    /// Set the idle-poll sleep interval.
    ///
    /// - Too low: more CPU spent polling.
    /// - Too high: slower reaction to release.
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Set the stagger between rate-policy activations.
    pub fn rate_delay_ms(mut self, ms: u64) -> Self {
        self.config.rate_delay_ms = ms;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> RunConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = RunConfig::builder()
            .policy(ReleasePolicy::Relay)
            .timeout_ms(0)
            .active_workers(2)
            .pool_size(8)
            .build();

        assert_eq!(config.policy, ReleasePolicy::Relay);
        assert_eq!(config.timeout_ms, 0);
        assert_eq!(config.active_workers, 2);
        assert_eq!(config.pool_size, 8);
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn defaults_use_hardware_parallelism() {
        let config = RunConfig::default();
        assert!(config.pool_size >= 1);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
