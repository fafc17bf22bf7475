//! Periodic distance sampler.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::config::SamplerConfig;
use crate::error::{Result, SamplerError};

use super::filter::{DebounceFilter, Sample};
use super::shared::SharedDistance;

/// A digital input that can time a high pulse.
pub trait PulseInput {
    /// Error returned by the underlying hardware.
    type Error;

    /// Duration of the next high pulse in microseconds.
    ///
    /// Returns 0 if no pulse arrived before the hardware timeout.
    fn measure_pulse(&mut self) -> core::result::Result<u32, Self::Error>;
}

impl<F, E> PulseInput for F
where
    F: FnMut() -> core::result::Result<u32, E>,
{
    type Error = E;

    fn measure_pulse(&mut self) -> core::result::Result<u32, E> {
        self()
    }
}

/// Cancellation flag for [`DistanceSampler::run`].
#[derive(Debug, Default)]
pub struct StopToken(AtomicBool);

impl StopToken {
    /// Create a token that is not cancelled.
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Ask the sampler loop to stop after its current poll.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag so the token can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Polls a [`PulseInput`], debounces and publishes to a [`SharedDistance`].
pub struct DistanceSampler<'a, P, D>
where
    P: PulseInput,
    D: DelayNs,
{
    input: P,
    delay: D,
    filter: DebounceFilter,
    output: &'a SharedDistance,
    poll_interval_ms: u32,
}

impl<'a, P, D> DistanceSampler<'a, P, D>
where
    P: PulseInput,
    D: DelayNs,
{
    /// Create a sampler from configuration.
    pub fn new(input: P, delay: D, output: &'a SharedDistance, config: &SamplerConfig) -> Self {
        Self {
            input,
            delay,
            filter: DebounceFilter::from_config(config),
            output,
            poll_interval_ms: config.poll_interval_ms,
        }
    }

    /// The filter state.
    #[inline]
    pub fn filter(&self) -> &DebounceFilter {
        &self.filter
    }

    /// Most recent accepted reading.
    #[inline]
    pub fn current(&self) -> u32 {
        self.output.current()
    }

    /// Take one measurement, filter it and publish the result.
    ///
    /// The shared reading only changes when the sample is accepted; the
    /// stale count is published either way.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::Measurement`] if the input fails. The filter
    /// and shared reading are left untouched.
    pub fn poll_once(&mut self) -> Result<Sample> {
        let raw = self
            .input
            .measure_pulse()
            .map_err(|_| SamplerError::Measurement)?;

        let sample = self.filter.offer(raw);
        self.output
            .publish(self.filter.value(), self.filter.stale_count());

        match sample {
            Sample::Accepted(value) => trace!("sampler: accepted {} us", value),
            Sample::Rejected(value) => trace!(
                "sampler: rejected {} us (stale {})",
                value,
                self.filter.stale_count()
            ),
        }

        Ok(sample)
    }

    /// Poll until `stop` is cancelled, sleeping the poll interval in between.
    ///
    /// Measurement errors are logged and skipped. The token is checked before
    /// every poll and before every sleep. Returns the number of polls made.
    pub fn run(&mut self, stop: &StopToken) -> usize {
        debug!("sampler: started, interval {} ms", self.poll_interval_ms);
        let mut polls = 0;

        while !stop.is_cancelled() {
            if self.poll_once().is_err() {
                warn!("sampler: measurement failed");
            }
            polls += 1;

            if stop.is_cancelled() {
                break;
            }
            self.delay.delay_ms(self.poll_interval_ms);
        }

        debug!("sampler: stopped after {} polls", polls);
        polls
    }

    /// Tear down and return the input and delay.
    pub fn into_parts(self) -> (P, D) {
        (self.input, self.delay)
    }
}
