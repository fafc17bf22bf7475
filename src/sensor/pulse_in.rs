//! Pulse timing on a plain digital input.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::SamplerConfig;

use super::sampler::PulseInput;

/// Times high pulses on an `InputPin` by polling it once per microsecond.
///
/// Waits for any pulse already in progress to end, then for the next rising
/// edge, then counts until the falling edge. Each wait is bounded by the
/// timeout; running out returns 0. The width counts delay ticks, so pin read
/// overhead makes it read slightly short on slow cores.
pub struct PulseIn<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    pin: P,
    delay: D,
    timeout_us: u32,
}

impl<P, D> PulseIn<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    /// Create a pulse timer.
    pub fn new(pin: P, delay: D, timeout_us: u32) -> Self {
        Self {
            pin,
            delay,
            timeout_us,
        }
    }

    /// Create a pulse timer using the configured timeout.
    pub fn from_config(pin: P, delay: D, config: &SamplerConfig) -> Self {
        Self::new(pin, delay, config.timeout_us)
    }

    /// Return the pin and delay.
    pub fn into_parts(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Spend one microsecond of the budget, `false` once it is used up.
    fn tick(&mut self, waited: &mut u32) -> bool {
        if *waited >= self.timeout_us {
            return false;
        }
        self.delay.delay_us(1);
        *waited += 1;
        true
    }
}

impl<P, D> PulseInput for PulseIn<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    type Error = P::Error;

    fn measure_pulse(&mut self) -> Result<u32, Self::Error> {
        let mut waited = 0;
        while self.pin.is_high()? {
            if !self.tick(&mut waited) {
                return Ok(0);
            }
        }

        while self.pin.is_low()? {
            if !self.tick(&mut waited) {
                return Ok(0);
            }
        }

        let mut width = 0;
        while self.pin.is_high()? {
            if !self.tick(&mut waited) {
                return Ok(0);
            }
            width += 1;
        }

        Ok(width)
    }
}
