//! Debounce filter for pulse-width readings.

use crate::config::SamplerConfig;

/// Outcome of offering one raw sample to the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sample {
    /// The sample replaced the stored reading.
    Accepted(u32),
    /// The sample was discarded.
    Rejected(u32),
}

impl Sample {
    /// Whether the sample was accepted.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Sample::Accepted(_))
    }
}

/// Filters single-sample noise out of a pulse-duration stream.
///
/// A sample is accepted when it is positive and below the threshold, or when
/// it is above the threshold and at least `stale_limit` samples in a row were
/// rejected before it. A sample equal to the threshold is never accepted.
/// Rejections are only counted once a first reading has been accepted.
#[derive(Debug, Clone)]
pub struct DebounceFilter {
    threshold_us: u32,
    stale_limit: u8,
    value: u32,
    stale: u8,
}

impl DebounceFilter {
    /// Create a filter with nothing stored yet.
    pub const fn new(threshold_us: u32, stale_limit: u8) -> Self {
        Self {
            threshold_us,
            stale_limit,
            value: 0,
            stale: 0,
        }
    }

    /// Create a filter from sampler configuration.
    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::new(config.threshold_us, config.stale_limit)
    }

    /// Offer one raw sample.
    pub fn offer(&mut self, sample: u32) -> Sample {
        let near = sample > 0 && sample < self.threshold_us;
        let far = sample > self.threshold_us && self.stale >= self.stale_limit;

        if near || far {
            self.value = sample;
            self.stale = 0;
            Sample::Accepted(sample)
        } else {
            if self.value > 0 {
                self.stale = self.stale.saturating_add(1);
            }
            Sample::Rejected(sample)
        }
    }

    /// Last accepted reading, 0 if none.
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Rejections since the last accepted reading.
    #[inline]
    pub fn stale_count(&self) -> u8 {
        self.stale
    }

    /// Acceptance threshold in microseconds.
    #[inline]
    pub fn threshold_us(&self) -> u32 {
        self.threshold_us
    }
}
