//! Distance sampler configuration from TOML.

use serde::Deserialize;

/// Default acceptance threshold in microseconds.
pub const DEFAULT_THRESHOLD_US: u32 = 1000;

/// Default polling interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Default number of rejected samples before a long reading is trusted.
pub const DEFAULT_STALE_LIMIT: u8 = 2;

/// Default pulse timeout in microseconds.
pub const DEFAULT_TIMEOUT_US: u32 = 1_000_000;

/// Pulse-width distance sampler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SamplerConfig {
    /// Board pin number of the echo input.
    ///
    /// Only checked against the motor pins for conflicts; the echo pin itself
    /// is handed to [`PulseIn`](crate::sensor::PulseIn) by the application.
    #[serde(default)]
    pub pin: Option<u8>,

    /// Pulses shorter than this are accepted immediately.
    #[serde(default = "default_threshold")]
    pub threshold_us: u32,

    /// Delay between two polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u32,

    /// Consecutive rejections needed before a pulse above the threshold is accepted.
    #[serde(default = "default_stale_limit")]
    pub stale_limit: u8,

    /// How long [`PulseIn`](crate::sensor::PulseIn) waits for each pulse edge.
    #[serde(default = "default_timeout")]
    pub timeout_us: u32,
}

fn default_timeout() -> u32 {
    DEFAULT_TIMEOUT_US
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD_US
}

fn default_poll_interval() -> u32 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_stale_limit() -> u8 {
    DEFAULT_STALE_LIMIT
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            pin: None,
            threshold_us: DEFAULT_THRESHOLD_US,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            stale_limit: DEFAULT_STALE_LIMIT,
            timeout_us: DEFAULT_TIMEOUT_US,
        }
    }
}
